//! Signed-in user's dashboard summary.

use serde::Serialize;

use crate::bookmarks::BookmarkSet;
use crate::model::{Catalog, College};
use crate::traits::User;

/// What the dashboard shows for one user.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard<'a> {
    /// Name used in the greeting.
    pub user_name: String,
    /// Bookmarked colleges, in catalog order.
    pub saved_colleges: Vec<&'a College>,
}

impl<'a> Dashboard<'a> {
    pub fn build(user: &User, catalog: &'a Catalog, bookmarks: &BookmarkSet) -> Self {
        Self {
            user_name: user.name.clone(),
            saved_colleges: bookmarks.saved_colleges(catalog),
        }
    }

    pub fn greeting(&self) -> String {
        format!("Welcome back, {}!", self.user_name)
    }

    pub fn saved_count(&self) -> usize {
        self.saved_colleges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::college;
    use crate::model::InstitutionType;
    use uuid::Uuid;

    #[test]
    fn dashboard_lists_saved_colleges() {
        let catalog = Catalog {
            name: "Test".into(),
            description: String::new(),
            colleges: vec![
                college("1", "IIT Delhi", "Delhi", InstitutionType::Central, 1, 1),
                college("5", "BITS Pilani", "Pilani", InstitutionType::Deemed, 25, 1),
            ],
        };
        let user = User {
            id: Uuid::nil(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
        };
        let bookmarks = BookmarkSet::from_ids(["5"]);

        let dashboard = Dashboard::build(&user, &catalog, &bookmarks);
        assert_eq!(dashboard.greeting(), "Welcome back, Asha!");
        assert_eq!(dashboard.saved_count(), 1);
        assert_eq!(dashboard.saved_colleges[0].name, "BITS Pilani");
    }

    #[test]
    fn empty_bookmarks_give_empty_dashboard() {
        let catalog = Catalog {
            name: "Test".into(),
            description: String::new(),
            colleges: vec![],
        };
        let user = User {
            id: Uuid::nil(),
            name: "Ravi".into(),
            email: "ravi@example.com".into(),
        };
        let dashboard = Dashboard::build(&user, &catalog, &BookmarkSet::new());
        assert_eq!(dashboard.saved_count(), 0);
    }
}
