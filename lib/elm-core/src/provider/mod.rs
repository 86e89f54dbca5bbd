pub mod credential_formatter;
