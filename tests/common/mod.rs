use std::path::{Path, PathBuf};
use std::sync::Once;
use env_logger;
use log::LevelFilter;
use tempfile::TempDir;

static INIT: Once = Once::new();

pub fn setup() {
    INIT.call_once(|| {
        env_logger::builder()
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .try_init()
            .ok();
    });
}

/// Bytes `tests/data/program.hex` must convert to.
pub const PROGRAM_BYTES: &[u8] = &[
    0x60, 0x00, 0x61, 0x05, 0xA2, 0x1E,
    0xD0, 0x15, 0x70, 0x01, 0x30, 0x40,
    0x12, 0x0A,
    0x00, 0xE0, 0x00, 0xEE, 0xFF, 0xFF,
];

pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        setup();
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn write_input(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).unwrap();
        path
    }
}

pub fn get_test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

pub fn get_program_path() -> PathBuf {
    get_test_data_dir().join("program.hex")
}

pub fn read_bytes(path: impl AsRef<Path>) -> Vec<u8> {
    std::fs::read(path).unwrap()
}
