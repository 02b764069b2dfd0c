//! Role capabilities, resolved outside the dashboard and consumed read-only

use crate::config::PermissionsConfig;

/// Capability set consumed by the dashboard
pub trait PermissionSet: Send + Sync {
    fn can_create(&self) -> bool;
    fn can_edit(&self) -> bool;
    fn can_delete(&self) -> bool;
    fn can_view(&self) -> bool;
}

/// Fixed capability flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
    pub view: bool,
}

impl Permissions {
    pub const ALL: Permissions = Permissions {
        create: true,
        edit: true,
        delete: true,
        view: true,
    };

    pub const READ_ONLY: Permissions = Permissions {
        create: false,
        edit: false,
        delete: false,
        view: true,
    };
}

impl Default for Permissions {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<&PermissionsConfig> for Permissions {
    fn from(config: &PermissionsConfig) -> Self {
        Self {
            create: config.can_create_link,
            edit: config.can_edit_link,
            delete: config.can_delete_link,
            view: config.can_view_link,
        }
    }
}

impl PermissionSet for Permissions {
    fn can_create(&self) -> bool {
        self.create
    }

    fn can_edit(&self) -> bool {
        self.edit
    }

    fn can_delete(&self) -> bool {
        self.delete
    }

    fn can_view(&self) -> bool {
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let config = PermissionsConfig {
            can_create_link: false,
            can_edit_link: true,
            can_delete_link: false,
            can_view_link: true,
        };
        let perms = Permissions::from(&config);
        assert!(!perms.can_create());
        assert!(perms.can_edit());
        assert!(!perms.can_delete());
        assert!(perms.can_view());
    }
}
