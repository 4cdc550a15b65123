mod csv_roundtrip;
mod errors;
mod modes;
