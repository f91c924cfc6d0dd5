//! Vibration pulses

use std::io::Write;

use tasbih_core::prelude::*;

/// Pulses a vibration motor
#[cfg_attr(any(test, feature = "test-helpers"), mockall::automock)]
pub trait HapticDriver: Send + Sync {
    fn vibrate(&self, duration_ms: u32) -> Result<()>;
}

/// Rings the terminal bell on stderr in place of a motor.
///
/// stdout is reserved for the event stream, so the bell goes to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellHaptics;

impl HapticDriver for BellHaptics {
    fn vibrate(&self, duration_ms: u32) -> Result<()> {
        let mut stderr = std::io::stderr().lock();
        stderr
            .write_all(b"\x07")
            .and_then(|_| stderr.flush())
            .map_err(|e| Error::haptic(e.to_string()))?;
        trace!("Bell for {}ms vibration", duration_ms);
        Ok(())
    }
}

/// No vibration hardware
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl HapticDriver for NoHaptics {
    fn vibrate(&self, _duration_ms: u32) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_haptics() {
        assert!(NoHaptics.vibrate(150).is_ok());
    }

    #[test]
    fn test_mock_haptics_reports_failure() {
        let mut mock = MockHapticDriver::new();
        mock.expect_vibrate()
            .with(mockall::predicate::eq(150))
            .returning(|_| Err(Error::haptic("no motor")));
        assert!(mock.vibrate(150).unwrap_err().is_driver_failure());
    }
}
