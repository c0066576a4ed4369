//! SRV records.

use std::fmt::Display;

/// Representation of types that contain the fields of a SRV record.
pub trait SrvRecord {
    /// Type representing the SRV record's target. Must implement `Display` so
    /// it can be joined with the port into an authority.
    type Target: Display + ?Sized;

    /// Gets a SRV record's target.
    fn target(&self) -> &Self::Target;

    /// Gets a SRV record's port.
    fn port(&self) -> u16;

    /// Gets a SRV record's priority.
    fn priority(&self) -> u16;

    /// Gets a SRV record's weight.
    fn weight(&self) -> u16;

    /// Formats a SRV record's target and port as a `host:port` authority.
    ///
    /// ```
    /// use srv_order::{ServiceRecord, SrvRecord};
    /// let record = ServiceRecord::new(1, 100, 8211, "srv-order.example.org");
    /// assert_eq!(record.authority(), "srv-order.example.org:8211");
    /// ```
    fn authority(&self) -> String {
        format!("{}:{}", self.target(), self.port())
    }
}

impl<T: SrvRecord + ?Sized> SrvRecord for &T {
    type Target = T::Target;

    fn target(&self) -> &Self::Target {
        (**self).target()
    }

    fn port(&self) -> u16 {
        (**self).port()
    }

    fn priority(&self) -> u16 {
        (**self).priority()
    }

    fn weight(&self) -> u16 {
        (**self).weight()
    }
}

/// Owned SRV record, independent of any resolver backend.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceRecord {
    /// Record's priority.
    pub priority: u16,
    /// Record's weight.
    pub weight: u16,
    /// Record's port.
    pub port: u16,
    /// Records's target.
    pub target: String,
}

impl ServiceRecord {
    /// Creates a record from its fields.
    pub fn new(priority: u16, weight: u16, port: u16, target: impl Into<String>) -> Self {
        Self {
            priority,
            weight,
            port,
            target: target.into(),
        }
    }
}

impl SrvRecord for ServiceRecord {
    type Target = str;

    fn target(&self) -> &Self::Target {
        &self.target
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn priority(&self) -> u16 {
        self.priority
    }

    fn weight(&self) -> u16 {
        self.weight
    }
}
