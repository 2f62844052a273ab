use crate::lps331ap::register::Register;

/// RES_CONF value applied by the default configuration.
pub const DEFAULT_RES_CONF: u8 = 0x78;
/// First CTRL_REG1 value: 25 Hz data rate, block data update, still powered
/// down.
pub const DEFAULT_CTRL_STANDBY: u8 = 0x74;
/// Second CTRL_REG1 value: the same configuration with the power-down bit
/// released.
pub const DEFAULT_CTRL_ACTIVE: u8 = 0xF4;

/// One write/readback verification step of the default configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readback {
    pub register: Register,
    pub expected: u8,
    pub actual: u8,
}

impl Readback {
    pub fn matched(&self) -> bool {
        self.expected == self.actual
    }
}

/// Per-step outcome of the bulk default-configuration sequence.
///
/// [`ConfigReport::all_matched`] collapses the four checks into the single
/// pass/fail the click-board API reports; the individual fields say which
/// step disagreed and what was read back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfigReport {
    /// RES_CONF readback after writing [`DEFAULT_RES_CONF`].
    pub resolution: Readback,
    /// CTRL_REG1 readback after writing [`DEFAULT_CTRL_STANDBY`].
    pub control_standby: Readback,
    /// CTRL_REG1 readback after writing [`DEFAULT_CTRL_ACTIVE`].
    pub control_active: Readback,
    /// WHO_AM_I check against [`crate::lps331ap::register::DEVICE_ID`].
    pub device_id: Readback,
}

impl ConfigReport {
    /// True only if every readback matched its expected value.
    pub fn all_matched(&self) -> bool {
        self.steps().iter().all(Readback::matched)
    }

    pub fn steps(&self) -> [Readback; 4] {
        [
            self.resolution,
            self.control_standby,
            self.control_active,
            self.device_id,
        ]
    }
}
