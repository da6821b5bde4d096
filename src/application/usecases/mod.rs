pub mod scan_scheduled_drops;
