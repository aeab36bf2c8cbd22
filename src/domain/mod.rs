// Domain layer: payment records and analysis results. No I/O here.

pub mod model;
