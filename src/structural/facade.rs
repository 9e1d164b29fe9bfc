// Facade: one `start` call hides the CPU / memory / disk boot dance.

use crate::console::Transcript;

pub const BOOT_ADDRESS: u64 = 0;
pub const BOOT_SECTOR: u64 = 0;
pub const BOOT_SIZE: usize = 512;
pub const BOOT_ENTRY: u64 = 0x10;

mod hardware {
    use crate::console::Transcript;

    #[derive(Debug, Default)]
    pub struct Cpu;

    impl Cpu {
        pub fn freeze(&self, out: &mut Transcript) {
            out.say("CPU: Freezing...");
        }

        pub fn jump(&self, position: u64, out: &mut Transcript) {
            out.say(format!("CPU: Jumping to position {position}"));
        }

        pub fn execute(&self, out: &mut Transcript) {
            out.say("CPU: Executing instructions...");
        }
    }

    #[derive(Debug, Default)]
    pub struct Memory;

    impl Memory {
        pub fn load(&self, address: u64, data: &str, out: &mut Transcript) {
            out.say(format!("Memory: Loading data '{data}' to address {address}"));
        }
    }

    #[derive(Debug, Default)]
    pub struct HardDrive;

    impl HardDrive {
        pub fn read(&self, sector: u64, size: usize) -> String {
            format!("HardDrive: Reading {size} bytes from sector {sector}")
        }
    }
}

pub use hardware::{Cpu, HardDrive, Memory};

#[derive(Debug, Default)]
pub struct ComputerFacade {
    cpu: Cpu,
    memory: Memory,
    hard_drive: HardDrive,
}

impl ComputerFacade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self, out: &mut Transcript) {
        self.cpu.freeze(out);
        self.memory.load(BOOT_ADDRESS, "boot_data", out);
        self.cpu.jump(BOOT_ENTRY, out);
        self.cpu.execute(out);
        out.say("Computer started.");
    }

    pub fn shutdown(&self, out: &mut Transcript) {
        out.say("Computer shutting down.");
    }

    /// Describes the boot sector read without running the boot sequence.
    pub fn inspect_boot_sector(&self) -> String {
        self.hard_drive.read(BOOT_SECTOR, BOOT_SIZE)
    }
}

pub fn demo(out: &mut Transcript) {
    let computer = ComputerFacade::new();
    out.say(computer.inspect_boot_sector());
    computer.start(out);
    computer.shutdown(out);
}
