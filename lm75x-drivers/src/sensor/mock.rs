//! Register-file bus double for driver tests
//!
//! Behaves like an LM75-family part: a write sets the register pointer and
//! stores any following bytes, a read returns bytes from the pointed-to
//! register. Every transaction is logged.

use lm75x_hal::I2cBus;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    Write(u8, Vec<u8>),
    Read(u8, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    Nack,
    Bus,
}

pub struct MockBus {
    registers: [[u8; 2]; 8],
    pointer: usize,
    /// Address the simulated part answers on
    pub address: u8,
    /// Fail every transaction with this error
    pub fail: Option<MockError>,
    /// Fail once this many more transactions have succeeded
    pub fail_after: Option<usize>,
    pub log: Vec<Transaction>,
}

impl Default for MockBus {
    fn default() -> Self {
        Self {
            registers: [[0; 2]; 8],
            pointer: 0,
            address: 0x48,
            fail: None,
            fail_after: None,
            log: Vec::new(),
        }
    }
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload a 16-bit register
    pub fn set_register(&mut self, register: u8, value: u16) {
        self.registers[register as usize] = value.to_be_bytes();
    }

    /// Preload the first byte of a register (8-bit configuration)
    pub fn set_register_u8(&mut self, register: u8, value: u8) {
        self.registers[register as usize][0] = value;
    }

    pub fn register(&self, register: u8) -> u16 {
        u16::from_be_bytes(self.registers[register as usize])
    }

    pub fn register_u8(&self, register: u8) -> u8 {
        self.registers[register as usize][0]
    }

    fn check(&mut self, address: u8) -> Result<(), MockError> {
        if let Some(e) = self.fail {
            return Err(e);
        }
        match self.fail_after {
            Some(0) => return Err(MockError::Bus),
            Some(n) => self.fail_after = Some(n - 1),
            None => {}
        }
        if address != self.address {
            return Err(MockError::Nack);
        }
        Ok(())
    }
}

impl I2cBus for MockBus {
    type Error = MockError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.log.push(Transaction::Write(address, data.to_vec()));
        self.check(address)?;
        if let Some((&pointer, payload)) = data.split_first() {
            self.pointer = pointer as usize;
            for (slot, &byte) in self.registers[self.pointer].iter_mut().zip(payload) {
                *slot = byte;
            }
        }
        Ok(())
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.log.push(Transaction::Read(address, buf.len()));
        self.check(address)?;
        for (i, byte) in buf.iter_mut().enumerate() {
            *byte = self.registers[self.pointer].get(i).copied().unwrap_or(0);
        }
        Ok(())
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.write(address, write_data)?;
        self.read(address, read_buf)
    }
}
