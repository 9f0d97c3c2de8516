use num_traits::{PrimInt, Unsigned};

/// Represents a timer inside of the chip
/// infrastruture, it will count down to
/// zero from what ever number it was given,
/// by one for every tick it receives.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timer<T = u8> {
    /// will store the value of the timer
    value: T,
}

impl<T> Timer<T>
where
    T: PrimInt + Unsigned,
{
    /// Will create a new timer with the given value.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Will set the value from which the timer shall count down from.
    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    /// Will get the value that the counter is currently at.
    pub fn get_value(&self) -> T {
        self.value
    }

    /// Checks if the timer is still counting down.
    pub fn is_active(&self) -> bool {
        self.value > T::zero()
    }

    /// Counts down by one, a timer at zero stays there.
    pub fn tick(&mut self) {
        if self.is_active() {
            self.value = self.value - T::one();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer() {
        let mut timer: Timer = Timer::new(3);
        assert!(timer.is_active());

        for expected in (0..3).rev() {
            timer.tick();
            assert_eq!(timer.get_value(), expected);
        }
        assert!(!timer.is_active());

        // saturates at zero
        timer.tick();
        assert_eq!(timer.get_value(), 0);
    }

    #[test]
    fn test_set_value() {
        let mut timer = Timer::<u16>::default();
        assert_eq!(timer.get_value(), 0);

        timer.set_value(0x1FF);
        timer.tick();
        assert_eq!(timer.get_value(), 0x1FE);
    }
}
