/// UI layer: egui panels and widgets. Consumes only the data layer's
/// derived products; owns no computation of its own.

pub mod charts;
pub mod panels;
pub mod table;
