use crate::catalog::Catalog;
use crate::notifications::NotificationStore;

/// Everything a session works on: the course catalog and the notification
/// histories. Both live for the lifetime of the process and are never saved.
#[derive(Debug, Clone, Default)]
pub struct CourseDesk {
    pub catalog: Catalog,
    pub notifications: NotificationStore,
}

impl CourseDesk {
    /// Empty catalog, no notifications
    pub fn new() -> Self {
        Self::default()
    }

    /// The startup state: sample courses seeded, no notifications
    pub fn with_sample_courses() -> Self {
        Self {
            catalog: Catalog::with_sample_courses(),
            notifications: NotificationStore::new(),
        }
    }
}
