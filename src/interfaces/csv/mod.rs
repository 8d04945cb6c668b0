pub mod member_reader;
