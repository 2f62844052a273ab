use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiBus;

use crate::lps331ap::error::SpiError;

/// Address-byte mask for SPI register reads: bit 6 is cleared.
pub const SPI_READ_ADDR_MASK: u8 = 0xBF;
/// Address-byte mask for SPI register writes: bits 7 and 6 are cleared.
pub const SPI_WRITE_ADDR_MASK: u8 = 0x3F;

/// I2C slave address, selected by the SA0 pad on the click board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceAddr {
    /// 0x5C
    Sa0Gnd = 0x5C,
    /// 0x5D
    Sa0Vdd = 0x5D,
}

/// A way of reaching the sensor's register file.
///
/// Both transports expose the same one-byte register read/write; everything
/// above this seam is transport-independent. The transport is chosen once,
/// at construction, and stays fixed for the life of the driver.
pub trait Interface {
    type Error;

    /// Performs a one-byte register read.
    fn read_register(&mut self, address: u8) -> Result<u8, Self::Error>;

    /// Performs a one-byte register write.
    fn write_register(&mut self, address: u8, value: u8) -> Result<(), Self::Error>;
}

/// 4-wire SPI transport: a bus plus a dedicated chip-select output.
///
/// The address byte and the data byte travel as two half-duplex phases
/// (write, then read) under one chip-select assertion, never as a single
/// full-duplex transfer.
pub struct SpiInterface<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> SpiInterface<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    /// Binds the transport to an already-configured SPI bus and chip-select
    /// pin. Chip-select is driven inactive (high) before this returns.
    pub fn new(spi: SPI, mut cs: CS) -> Result<Self, SpiError<SPI::Error, CS::Error>> {
        cs.set_high().map_err(SpiError::ChipSelect)?;
        Ok(Self { spi, cs })
    }

    /// Gives the bus and chip-select pin back.
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> Interface for SpiInterface<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    type Error = SpiError<SPI::Error, CS::Error>;

    fn read_register(&mut self, address: u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.cs.set_low().map_err(SpiError::ChipSelect)?;
        let transfer = self
            .spi
            .write(&[address & SPI_READ_ADDR_MASK])
            .and_then(|()| self.spi.read(&mut buf))
            .and_then(|()| self.spi.flush());
        // Chip-select is released even when the transfer failed.
        self.cs.set_high().map_err(SpiError::ChipSelect)?;
        transfer.map_err(SpiError::Transfer)?;
        Ok(buf[0])
    }

    fn write_register(&mut self, address: u8, value: u8) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(SpiError::ChipSelect)?;
        let transfer = self
            .spi
            .write(&[address & SPI_WRITE_ADDR_MASK, value])
            .and_then(|()| self.spi.flush());
        self.cs.set_high().map_err(SpiError::ChipSelect)?;
        transfer.map_err(SpiError::Transfer)
    }
}

/// I2C transport bound to one of the two selectable slave addresses.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C, address: DeviceAddr) -> Self {
        Self {
            i2c,
            address: address as u8,
        }
    }

    /// Gives the I2C peripheral back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Interface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn read_register(&mut self, address: u8) -> Result<u8, Self::Error> {
        // Address phase ends with a repeated start, data phase with a stop.
        let mut buf = [0u8; 1];
        self.i2c.write_read(self.address, &[address], &mut buf)?;
        Ok(buf[0])
    }

    fn write_register(&mut self, address: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[address, value])
    }
}
