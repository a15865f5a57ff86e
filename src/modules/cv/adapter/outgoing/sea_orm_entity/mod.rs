pub mod cvs;
