#![allow(dead_code)]

use kconsole::{Console, TextDevice};

/// Records every write, keeping call boundaries.
#[derive(Default)]
pub struct Capture {
    pub writes: Vec<Vec<u8>>,
    pub offline: bool,
}

impl Capture {
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.writes.concat()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.bytes()).expect("console output is not UTF-8")
    }
}

impl TextDevice for Capture {
    fn is_available(&self) -> bool {
        !self.offline
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.writes.push(bytes.to_vec());
    }
}

pub fn console() -> Console<Capture> {
    Console::new(Some(Capture::default()))
}

pub fn finish(console: Console<Capture>) -> Capture {
    console.into_device().expect("console lost its device")
}
