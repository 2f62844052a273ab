/// Driver error.
///
/// `CommE` is the error of the selected bus transport, `PinE` the error of
/// the interrupt GPIO.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error<CommE, PinE> {
    /// The bus transport reported a failure.
    #[error("bus transfer failed: {0:?}")]
    Comm(CommE),
    /// The interrupt pin could not be read.
    #[error("interrupt pin read failed: {0:?}")]
    Pin(PinE),
}

/// SPI transport error, split by which half of the transaction failed.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SpiError<E, P> {
    /// The SPI peripheral reported a transfer failure.
    #[error("SPI transfer failed: {0:?}")]
    Transfer(E),
    /// The chip-select pin could not be driven.
    #[error("chip-select pin error: {0:?}")]
    ChipSelect(P),
}
