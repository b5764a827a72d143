/// Property-list decode command.
pub mod decode;
/// File-level information command.
pub mod info;
/// Value tree printing helpers.
pub mod print;
/// Struct registry listing command.
pub mod structs;

#[cfg(test)]
mod test_support;
