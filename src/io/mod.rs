pub mod dump_io;
