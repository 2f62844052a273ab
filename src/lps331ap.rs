use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::i2c::I2c;
use embedded_hal::spi::SpiBus;
use log::warn;

pub mod config;
pub mod error;
pub mod interface;
pub mod measurement;
pub mod register;

use crate::lps331ap::config::{
    ConfigReport, Readback, DEFAULT_CTRL_ACTIVE, DEFAULT_CTRL_STANDBY, DEFAULT_RES_CONF,
};
use crate::lps331ap::error::{Error, SpiError};
use crate::lps331ap::interface::{DeviceAddr, I2cInterface, Interface, SpiInterface};
use crate::lps331ap::measurement::{pressure_from_raw, temperature_from_raw, Measurement};
use crate::lps331ap::register::{Register, DEVICE_ID};

// CTRL_REG1 bits
const PD: u8 = 0x80;
const ODR_MASK: u8 = 0x70;
const DIFF_EN: u8 = 0x08;
const BDU: u8 = 0x04;
const DELTA_EN: u8 = 0x02;
const SIM_3WIRE: u8 = 0x01;

// CTRL_REG2 bits
const SWRESET: u8 = 0x04;

/// SPI wiring mode of the sensor's own serial interface, CTRL_REG1.
///
/// The two selections are independent bit operations: four-wire clears
/// bit 4, three-wire sets bit 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpiMode {
    FourWire,
    ThreeWire,
}

/// LPS331AP driver, bound to one transport and the board's INT line.
///
/// The transport (`SpiInterface` or `I2cInterface`) is picked at
/// construction and owned exclusively for the driver's lifetime; so is the
/// interrupt input. [`Lps331ap::release`] gives both back.
pub struct Lps331ap<IFACE, INT> {
    iface: IFACE,
    int: INT,
}

impl<SPI, CS, INT> Lps331ap<SpiInterface<SPI, CS>, INT>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    INT: InputPin,
{
    /// Binds the driver to a pre-configured SPI bus, a chip-select output
    /// and the interrupt input. Chip-select is left inactive (high).
    pub fn new_spi(
        spi: SPI,
        cs: CS,
        int: INT,
    ) -> Result<Self, Error<SpiError<SPI::Error, CS::Error>, INT::Error>> {
        let iface = SpiInterface::new(spi, cs).map_err(Error::Comm)?;
        Ok(Self { iface, int })
    }
}

impl<I2C, INT> Lps331ap<I2cInterface<I2C>, INT>
where
    I2C: I2c,
    INT: InputPin,
{
    /// Binds the driver to a pre-configured I2C peripheral at the given
    /// slave address, plus the interrupt input.
    pub fn new_i2c(i2c: I2C, address: DeviceAddr, int: INT) -> Self {
        Self {
            iface: I2cInterface::new(i2c, address),
            int,
        }
    }
}

impl<IFACE, INT, CommE, PinE> Lps331ap<IFACE, INT>
where
    IFACE: Interface<Error = CommE>,
    INT: InputPin<Error = PinE>,
{
    fn read_register(&mut self, register: Register) -> Result<u8, Error<CommE, PinE>> {
        self.iface
            .read_register(register.address())
            .map_err(Error::Comm)
    }

    fn write_register(&mut self, register: Register, value: u8) -> Result<(), Error<CommE, PinE>> {
        self.iface
            .write_register(register.address(), value)
            .map_err(Error::Comm)
    }

    /// Read-modify-write; bits outside whatever `f` touches survive.
    fn modify_register<F>(&mut self, register: Register, f: F) -> Result<(), Error<CommE, PinE>>
    where
        F: FnOnce(u8) -> u8,
    {
        let value = self.read_register(register)?;
        self.write_register(register, f(value))
    }

    fn write_and_verify(
        &mut self,
        register: Register,
        expected: u8,
    ) -> Result<Readback, Error<CommE, PinE>> {
        self.write_register(register, expected)?;
        let actual = self.read_register(register)?;
        Ok(Readback {
            register,
            expected,
            actual,
        })
    }

    /// Reads the WHO_AM_I register. Every LPS331AP answers
    /// [`DEVICE_ID`](crate::lps331ap::register::DEVICE_ID).
    pub fn read_id(&mut self) -> Result<u8, Error<CommE, PinE>> {
        self.read_register(Register::WhoAmI)
    }

    /// ORs `value` into the RES_CONF resolution register.
    pub fn set_configuration(&mut self, value: u8) -> Result<(), Error<CommE, PinE>> {
        self.modify_register(Register::ResConf, |v| v | value)
    }

    /// Reads the RES_CONF resolution register.
    pub fn get_configuration(&mut self) -> Result<u8, Error<CommE, PinE>> {
        self.read_register(Register::ResConf)
    }

    /// Sets the PD bit, switching the device from power-down to active mode.
    pub fn enable(&mut self) -> Result<(), Error<CommE, PinE>> {
        self.modify_register(Register::CtrlReg1, |v| v | PD)
    }

    /// Clears the PD bit, putting the device into power-down mode.
    pub fn power_down(&mut self) -> Result<(), Error<CommE, PinE>> {
        self.modify_register(Register::CtrlReg1, |v| v & !PD)
    }

    /// Selects the output data rate, `rate` taken modulo 8 into bits 6:4 of
    /// CTRL_REG1. Pressure / temperature rates:
    ///
    /// - 0: one shot
    /// - 1: 1 Hz / 1 Hz
    /// - 2: 7 Hz / 1 Hz
    /// - 3: 12.5 Hz / 1 Hz
    /// - 4: 25 Hz / 1 Hz
    /// - 5: 7 Hz / 7 Hz
    /// - 6: 12.5 Hz / 12.5 Hz
    /// - 7: 25 Hz / 25 Hz
    pub fn set_output_data_rate(&mut self, rate: u8) -> Result<(), Error<CommE, PinE>> {
        let bits = (rate % 8) << 4;
        self.modify_register(Register::CtrlReg1, |v| (v & !ODR_MASK) | bits)
    }

    /// Sets the DIFF_EN bit, enabling the interrupt circuit.
    pub fn enable_interrupt_circuit(&mut self) -> Result<(), Error<CommE, PinE>> {
        self.modify_register(Register::CtrlReg1, |v| v | DIFF_EN)
    }

    /// Clears the DIFF_EN bit.
    pub fn disable_interrupt(&mut self) -> Result<(), Error<CommE, PinE>> {
        self.modify_register(Register::CtrlReg1, |v| v & !DIFF_EN)
    }

    /// Sets the BDU bit: output registers hold their value until both bytes
    /// of a sample were read, protecting the multi-byte reads below from
    /// tearing.
    pub fn block_data_update(&mut self) -> Result<(), Error<CommE, PinE>> {
        self.modify_register(Register::CtrlReg1, |v| v | BDU)
    }

    /// Clears the BDU bit, returning to continuous output updates.
    pub fn unblock_data_update(&mut self) -> Result<(), Error<CommE, PinE>> {
        self.modify_register(Register::CtrlReg1, |v| v & !BDU)
    }

    /// Sets the DELTA_EN bit, enabling delta pressure registers.
    pub fn enable_delta_pressure(&mut self) -> Result<(), Error<CommE, PinE>> {
        self.modify_register(Register::CtrlReg1, |v| v | DELTA_EN)
    }

    /// Clears the DELTA_EN bit.
    pub fn disable_delta_pressure(&mut self) -> Result<(), Error<CommE, PinE>> {
        self.modify_register(Register::CtrlReg1, |v| v & !DELTA_EN)
    }

    /// Selects the sensor's SPI wiring mode in CTRL_REG1; see [`SpiMode`]
    /// for the exact bit behavior of each selection.
    pub fn spi_serial_interface_mode(&mut self, mode: SpiMode) -> Result<(), Error<CommE, PinE>> {
        self.modify_register(Register::CtrlReg1, |v| match mode {
            // 4-wire: clear bit 4
            SpiMode::FourWire => v & 0xEF,
            SpiMode::ThreeWire => v | SIM_3WIRE,
        })
    }

    /// Sets the reboot-memory-content mode, `mode` taken modulo 2 into
    /// bit 7 of CTRL_REG2.
    ///
    /// The bit is OR'd in: mode 0 leaves a previously set BOOT bit
    /// untouched.
    pub fn reboot_memory_mode(&mut self, mode: u8) -> Result<(), Error<CommE, PinE>> {
        let bits = (mode % 2) << 7;
        self.modify_register(Register::CtrlReg2, |v| v | bits)
    }

    /// ORs the SWRESET bit into CTRL_REG2.
    pub fn soft_reset(&mut self) -> Result<(), Error<CommE, PinE>> {
        self.modify_register(Register::CtrlReg2, |v| v | SWRESET)
    }

    /// Merges `value` into the interrupt configuration.
    ///
    /// The current INT_CFG contents are read and OR'd with `value`, and the
    /// merged byte is written to CTRL_REG2 - not back to INT_CFG. Enable
    /// the `int-cfg-writeback` feature to target INT_CFG instead.
    pub fn set_interrupt_config(&mut self, value: u8) -> Result<(), Error<CommE, PinE>> {
        let merged = self.read_register(Register::IntCfg)? | value;
        let target = if cfg!(feature = "int-cfg-writeback") {
            Register::IntCfg
        } else {
            Register::CtrlReg2
        };
        self.write_register(target, merged)
    }

    /// Reads the INT_CFG interrupt configuration register.
    pub fn get_interrupt_config(&mut self) -> Result<u8, Error<CommE, PinE>> {
        self.read_register(Register::IntCfg)
    }

    /// Reads the STATUS register (data-available and overrun flags).
    pub fn status(&mut self) -> Result<u8, Error<CommE, PinE>> {
        self.read_register(Register::Status)
    }

    /// Reads the INT_SOURCE register.
    pub fn interrupt_source(&mut self) -> Result<u8, Error<CommE, PinE>> {
        self.read_register(Register::IntSource)
    }

    /// Writes the 16-bit differential pressure interrupt threshold.
    pub fn set_interrupt_threshold(&mut self, threshold: u16) -> Result<(), Error<CommE, PinE>> {
        let [msb, lsb] = threshold.to_be_bytes();
        self.write_register(Register::ThsPL, lsb)?;
        self.write_register(Register::ThsPH, msb)
    }

    /// Reads the 16-bit differential pressure interrupt threshold.
    pub fn interrupt_threshold(&mut self) -> Result<u16, Error<CommE, PinE>> {
        let lsb = self.read_register(Register::ThsPL)?;
        let msb = self.read_register(Register::ThsPH)?;
        Ok(u16::from_be_bytes([msb, lsb]))
    }

    /// Reads the reference pressure in mbar; same composition and scale as
    /// the pressure output.
    pub fn reference_pressure(&mut self) -> Result<f32, Error<CommE, PinE>> {
        let msb = self.read_register(Register::RefPH)?;
        let lsb = self.read_register(Register::RefPL)?;
        let xlsb = self.read_register(Register::RefPXl)?;
        Ok(pressure_from_raw(msb, lsb, xlsb))
    }

    /// Applies the click board's default configuration, reading every write
    /// back: RES_CONF <- 0x78, CTRL_REG1 <- 0x74 (configured, still powered
    /// down), CTRL_REG1 <- 0xF4 (same, active), then a WHO_AM_I identity
    /// check. The report says per step what was expected and what came
    /// back.
    pub fn apply_default_config(&mut self) -> Result<ConfigReport, Error<CommE, PinE>> {
        let resolution = self.write_and_verify(Register::ResConf, DEFAULT_RES_CONF)?;
        let control_standby = self.write_and_verify(Register::CtrlReg1, DEFAULT_CTRL_STANDBY)?;
        let control_active = self.write_and_verify(Register::CtrlReg1, DEFAULT_CTRL_ACTIVE)?;
        let device_id = Readback {
            register: Register::WhoAmI,
            expected: DEVICE_ID,
            actual: self.read_register(Register::WhoAmI)?,
        };

        let report = ConfigReport {
            resolution,
            control_standby,
            control_active,
            device_id,
        };
        for step in report.steps() {
            if !step.matched() {
                warn!(
                    "{:?} readback mismatch: expected {:#04x}, read {:#04x}",
                    step.register, step.expected, step.actual
                );
            }
        }
        Ok(report)
    }

    /// [`Lps331ap::apply_default_config`] collapsed into a single flag:
    /// true only when all four readbacks matched.
    pub fn default_config(&mut self) -> Result<bool, Error<CommE, PinE>> {
        Ok(self.apply_default_config()?.all_matched())
    }

    /// Reads and converts the pressure output, in mbar.
    ///
    /// Three one-byte transactions (MSB, LSB, XLSB); nothing makes them
    /// atomic against an output update. [`Lps331ap::block_data_update`] is
    /// the guard against torn samples.
    pub fn get_pressure(&mut self) -> Result<f32, Error<CommE, PinE>> {
        let msb = self.read_register(Register::PressOutH)?;
        let lsb = self.read_register(Register::PressOutL)?;
        let xlsb = self.read_register(Register::PressOutXl)?;
        Ok(pressure_from_raw(msb, lsb, xlsb))
    }

    /// Reads and converts the temperature output, in degrees Celsius.
    pub fn get_temperature(&mut self) -> Result<f32, Error<CommE, PinE>> {
        let msb = self.read_register(Register::TempOutH)?;
        let lsb = self.read_register(Register::TempOutL)?;
        Ok(temperature_from_raw(msb, lsb))
    }

    /// Reads pressure, then temperature.
    pub fn measurement(&mut self) -> Result<Measurement, Error<CommE, PinE>> {
        Ok(Measurement {
            pressure: self.get_pressure()?,
            temperature: self.get_temperature()?,
        })
    }

    /// Samples the interrupt line; true when the pin is high.
    pub fn interrupt_state(&mut self) -> Result<bool, Error<CommE, PinE>> {
        self.int.is_high().map_err(Error::Pin)
    }

    /// Consumes the driver, giving back the transport and interrupt pin.
    pub fn release(self) -> (IFACE, INT) {
        (self.iface, self.int)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

    const ADDR: u8 = 0x5C;

    fn driver(expectations: &[I2cTransaction]) -> Lps331ap<I2cInterface<I2cMock>, PinMock> {
        Lps331ap::new_i2c(
            I2cMock::new(expectations),
            DeviceAddr::Sa0Gnd,
            PinMock::new(&[]),
        )
    }

    fn finish(driver: Lps331ap<I2cInterface<I2cMock>, PinMock>) {
        let (iface, mut int) = driver.release();
        let mut i2c = iface.release();
        i2c.done();
        int.done();
    }

    fn read(register: u8, value: u8) -> I2cTransaction {
        I2cTransaction::write_read(ADDR, vec![register], vec![value])
    }

    fn write(register: u8, value: u8) -> I2cTransaction {
        I2cTransaction::write(ADDR, vec![register, value])
    }

    #[test]
    fn enable_sets_only_the_power_bit() {
        let mut lps = driver(&[read(0x20, 0x74), write(0x20, 0xF4)]);
        lps.enable().unwrap();
        finish(lps);
    }

    #[test]
    fn power_down_clears_only_the_power_bit() {
        let mut lps = driver(&[read(0x20, 0xF4), write(0x20, 0x74)]);
        lps.power_down().unwrap();
        finish(lps);
    }

    #[test]
    fn data_rate_touches_only_bits_6_to_4() {
        // Bits 7 and 3:0 already set must survive.
        let mut lps = driver(&[read(0x20, 0x8F), write(0x20, 0x9F)]);
        lps.set_output_data_rate(1).unwrap();
        finish(lps);
    }

    #[test]
    fn data_rate_wraps_modulo_eight() {
        // Rate 9 lands in the same field value as rate 1.
        let mut lps = driver(&[read(0x20, 0x00), write(0x20, 0x10)]);
        lps.set_output_data_rate(9).unwrap();
        finish(lps);
    }

    #[test]
    fn interrupt_circuit_is_bit_3() {
        let mut lps = driver(&[
            read(0x20, 0x00),
            write(0x20, 0x08),
            read(0x20, 0xFF),
            write(0x20, 0xF7),
        ]);
        lps.enable_interrupt_circuit().unwrap();
        lps.disable_interrupt().unwrap();
        finish(lps);
    }

    #[test]
    fn block_data_update_is_bit_2() {
        let mut lps = driver(&[
            read(0x20, 0x00),
            write(0x20, 0x04),
            read(0x20, 0xFF),
            write(0x20, 0xFB),
        ]);
        lps.block_data_update().unwrap();
        lps.unblock_data_update().unwrap();
        finish(lps);
    }

    #[test]
    fn delta_pressure_is_bit_1() {
        let mut lps = driver(&[
            read(0x20, 0x00),
            write(0x20, 0x02),
            read(0x20, 0xFF),
            write(0x20, 0xFD),
        ]);
        lps.enable_delta_pressure().unwrap();
        lps.disable_delta_pressure().unwrap();
        finish(lps);
    }

    #[test]
    fn spi_mode_selections_are_independent_bit_writes() {
        let mut lps = driver(&[
            read(0x20, 0xFF),
            write(0x20, 0xEF),
            read(0x20, 0x00),
            write(0x20, 0x01),
        ]);
        lps.spi_serial_interface_mode(SpiMode::FourWire).unwrap();
        lps.spi_serial_interface_mode(SpiMode::ThreeWire).unwrap();
        finish(lps);
    }

    #[test]
    fn reboot_memory_mode_never_clears_the_boot_bit() {
        let mut lps = driver(&[
            read(0x21, 0x00),
            write(0x21, 0x80),
            // Mode 0 with the bit already set writes the bit back unchanged.
            read(0x21, 0x80),
            write(0x21, 0x80),
        ]);
        lps.reboot_memory_mode(1).unwrap();
        lps.reboot_memory_mode(0).unwrap();
        finish(lps);
    }

    #[test]
    fn reboot_memory_mode_wraps_modulo_two() {
        let mut lps = driver(&[read(0x21, 0x00), write(0x21, 0x00)]);
        lps.reboot_memory_mode(2).unwrap();
        finish(lps);
    }

    #[test]
    fn soft_reset_ors_the_reset_bit() {
        let mut lps = driver(&[read(0x21, 0xA0), write(0x21, 0xA4)]);
        lps.soft_reset().unwrap();
        finish(lps);
    }

    #[cfg(not(feature = "int-cfg-writeback"))]
    #[test]
    fn interrupt_config_merge_lands_in_ctrl_reg2() {
        let mut lps = driver(&[read(0x23, 0x02), write(0x21, 0x07)]);
        lps.set_interrupt_config(0x05).unwrap();
        finish(lps);
    }

    #[cfg(feature = "int-cfg-writeback")]
    #[test]
    fn interrupt_config_merge_lands_in_int_cfg() {
        let mut lps = driver(&[read(0x23, 0x02), write(0x23, 0x07)]);
        lps.set_interrupt_config(0x05).unwrap();
        finish(lps);
    }

    #[test]
    fn interrupt_config_read() {
        let mut lps = driver(&[read(0x23, 0x07)]);
        assert_eq!(lps.get_interrupt_config().unwrap(), 0x07);
        finish(lps);
    }

    #[test]
    fn configuration_set_is_an_or_merge() {
        let mut lps = driver(&[read(0x10, 0x38), write(0x10, 0x78), read(0x10, 0x78)]);
        lps.set_configuration(0x40).unwrap();
        assert_eq!(lps.get_configuration().unwrap(), 0x78);
        finish(lps);
    }

    #[test]
    fn read_id_targets_who_am_i() {
        let mut lps = driver(&[read(0x0F, 0xBB)]);
        assert_eq!(lps.read_id().unwrap(), 0xBB);
        finish(lps);
    }

    #[test]
    fn status_and_interrupt_source_are_plain_reads() {
        let mut lps = driver(&[read(0x27, 0x03), read(0x24, 0x01)]);
        assert_eq!(lps.status().unwrap(), 0x03);
        assert_eq!(lps.interrupt_source().unwrap(), 0x01);
        finish(lps);
    }

    #[test]
    fn interrupt_threshold_round_trip() {
        let mut lps = driver(&[
            write(0x25, 0x10),
            write(0x26, 0x27),
            read(0x25, 0x10),
            read(0x26, 0x27),
        ]);
        lps.set_interrupt_threshold(0x2710).unwrap();
        assert_eq!(lps.interrupt_threshold().unwrap(), 0x2710);
        finish(lps);
    }

    #[test]
    fn reference_pressure_composes_like_the_pressure_output() {
        let mut lps = driver(&[read(0x0A, 0x00), read(0x09, 0x27), read(0x08, 0x10)]);
        assert_eq!(lps.reference_pressure().unwrap(), 2.44140625);
        finish(lps);
    }

    #[test]
    fn pressure_reads_msb_lsb_xlsb_and_scales() {
        let mut lps = driver(&[read(0x2A, 0x00), read(0x29, 0x27), read(0x28, 0x10)]);
        assert_eq!(lps.get_pressure().unwrap(), 2.44140625);
        finish(lps);
    }

    #[test]
    fn temperature_reads_msb_lsb_and_is_signed() {
        let mut lps = driver(&[read(0x2C, 0xFF), read(0x2B, 0xF0)]);
        assert_eq!(lps.get_temperature().unwrap(), -16.0 / 480.0 + 42.5);
        finish(lps);
    }

    #[test]
    fn measurement_reads_pressure_then_temperature() {
        let mut lps = driver(&[
            read(0x2A, 0x00),
            read(0x29, 0x27),
            read(0x28, 0x10),
            read(0x2C, 0x01),
            read(0x2B, 0x2C),
        ]);
        assert_eq!(
            lps.measurement().unwrap(),
            Measurement {
                pressure: 2.44140625,
                temperature: 43.125,
            }
        );
        finish(lps);
    }

    #[test]
    fn default_config_passes_when_every_readback_matches() {
        let mut lps = driver(&[
            write(0x10, 0x78),
            read(0x10, 0x78),
            write(0x20, 0x74),
            read(0x20, 0x74),
            write(0x20, 0xF4),
            read(0x20, 0xF4),
            read(0x0F, 0xBB),
        ]);
        assert!(lps.default_config().unwrap());
        finish(lps);
    }

    #[test]
    fn default_config_report_pinpoints_the_failing_step() {
        let mut lps = driver(&[
            write(0x10, 0x78),
            read(0x10, 0x78),
            write(0x20, 0x74),
            read(0x20, 0x74),
            write(0x20, 0xF4),
            // The power-up write did not stick.
            read(0x20, 0x74),
            read(0x0F, 0xBB),
        ]);
        let report = lps.apply_default_config().unwrap();
        assert!(report.resolution.matched());
        assert!(report.control_standby.matched());
        assert!(!report.control_active.matched());
        assert_eq!(report.control_active.actual, 0x74);
        assert!(report.device_id.matched());
        assert!(!report.all_matched());
        finish(lps);
    }

    #[test]
    fn default_config_fails_on_a_wrong_device_id() {
        let mut lps = driver(&[
            write(0x10, 0x78),
            read(0x10, 0x78),
            write(0x20, 0x74),
            read(0x20, 0x74),
            write(0x20, 0xF4),
            read(0x20, 0xF4),
            read(0x0F, 0x58),
        ]);
        assert!(!lps.default_config().unwrap());
        finish(lps);
    }

    #[test]
    fn interrupt_state_samples_the_int_pin() {
        let mut lps = Lps331ap::new_i2c(
            I2cMock::new(&[]),
            DeviceAddr::Sa0Gnd,
            PinMock::new(&[
                PinTransaction::get(PinState::High),
                PinTransaction::get(PinState::Low),
            ]),
        );
        assert!(lps.interrupt_state().unwrap());
        assert!(!lps.interrupt_state().unwrap());
        finish(lps);
    }

    #[test]
    fn spi_driver_reads_registers_with_the_read_mask() {
        let spi = SpiMock::new(&[
            SpiTransaction::write_vec(vec![0x0F]),
            SpiTransaction::read_vec(vec![0xBB]),
            SpiTransaction::flush(),
        ]);
        let cs = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);
        let int = PinMock::new(&[]);

        let mut lps = Lps331ap::new_spi(spi, cs, int).unwrap();
        assert_eq!(lps.read_id().unwrap(), 0xBB);

        let (iface, mut int) = lps.release();
        let (mut spi, mut cs) = iface.release();
        spi.done();
        cs.done();
        int.done();
    }
}
