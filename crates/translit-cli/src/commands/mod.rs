pub mod convert_ops;
pub mod info_ops;
pub mod table_ops;
