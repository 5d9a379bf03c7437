//! Mock host root for isolating portal consumers in tests.

use mockall::mock;

use crate::ui::portal::PortalRoot;

mock! {
    pub Root {}

    impl PortalRoot<String> for Root {
        fn attach(&mut self, root_id: &str, content: &String);
    }
}
