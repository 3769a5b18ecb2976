/// Optional knowledge about the host the reports came from, beyond what sar records: when the host
/// rebooted, and which devices share each interrupt line.  Nothing in parsing or querying depends
/// on it; it only enriches graph titles and annotations.
use sarutils::Timestamp;

pub trait Environment {
    /// Known reboot instants, in no particular order.
    fn reboots(&self) -> Vec<Timestamp>;

    /// Names of the devices on interrupt line `irq`, empty if unknown.
    fn interrupt_devices(&self, irq: u32) -> Vec<String>;
}

/// The environment when nothing is known.

#[derive(Debug, Default, Clone, Copy)]
pub struct NoEnvironment;

impl Environment for NoEnvironment {
    fn reboots(&self) -> Vec<Timestamp> {
        vec![]
    }

    fn interrupt_devices(&self, _irq: u32) -> Vec<String> {
        vec![]
    }
}
