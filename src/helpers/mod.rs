mod get_var;

pub use get_var::get_var_or_empty;
