pub mod uidl;
