/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCourse,
    SearchCourses,
    DisplayAllCourses,
    BulkUpload,
    SendNotification,
    ViewNotifications,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddCourse,
        MenuChoice::SearchCourses,
        MenuChoice::DisplayAllCourses,
        MenuChoice::BulkUpload,
        MenuChoice::SendNotification,
        MenuChoice::ViewNotifications,
        MenuChoice::Exit,
    ];

    /// Map a typed menu number to its entry
    pub fn from_number(number: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.number() == number)
    }

    /// The number shown next to this entry
    pub fn number(&self) -> i32 {
        match self {
            MenuChoice::AddCourse => 1,
            MenuChoice::SearchCourses => 2,
            MenuChoice::DisplayAllCourses => 3,
            MenuChoice::BulkUpload => 4,
            MenuChoice::SendNotification => 5,
            MenuChoice::ViewNotifications => 6,
            MenuChoice::Exit => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddCourse => "Add a New Course",
            MenuChoice::SearchCourses => "Search Courses",
            MenuChoice::DisplayAllCourses => "Display All Courses",
            MenuChoice::BulkUpload => "Bulk Upload Courses",
            MenuChoice::SendNotification => "Send Notifications",
            MenuChoice::ViewNotifications => "View Notifications",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            MenuChoice::AddCourse => "add",
            MenuChoice::SearchCourses => "search",
            MenuChoice::DisplayAllCourses => "list",
            MenuChoice::BulkUpload => "bulk-upload",
            MenuChoice::SendNotification => "send",
            MenuChoice::ViewNotifications => "view",
            MenuChoice::Exit => "exit",
        }
    }
}
