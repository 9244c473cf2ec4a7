pub mod kegiatan;
pub mod pengaturan;

pub use kegiatan::{CreateKegiatan, Kegiatan, UpdateKegiatan};
pub use pengaturan::{Pengaturan, ReplacePengaturan};
