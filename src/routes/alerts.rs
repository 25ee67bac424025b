/// Builds the `X-<app>-*` headers a client uses to display notifications
/// after a mutation.
#[derive(Debug, Clone)]
pub struct AlertHeaders {
    application_name: String,
}

impl AlertHeaders {
    pub fn new(application_name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
        }
    }

    pub fn entity_creation(&self, entity_name: &str, param: &str) -> Vec<(String, String)> {
        self.alert(entity_name, "created", param)
    }

    pub fn entity_update(&self, entity_name: &str, param: &str) -> Vec<(String, String)> {
        self.alert(entity_name, "updated", param)
    }

    pub fn entity_deletion(&self, entity_name: &str, param: &str) -> Vec<(String, String)> {
        self.alert(entity_name, "deleted", param)
    }

    pub fn failure(&self, entity_name: &str, error_key: &str) -> Vec<(String, String)> {
        vec![
            (self.header_name("error"), format!("error.{error_key}")),
            (self.header_name("params"), entity_name.to_owned()),
        ]
    }

    fn alert(&self, entity_name: &str, action: &str, param: &str) -> Vec<(String, String)> {
        vec![
            (
                self.header_name("alert"),
                format!("{}.{entity_name}.{action}", self.application_name),
            ),
            (self.header_name("params"), param.to_owned()),
        ]
    }

    fn header_name(&self, kind: &str) -> String {
        format!("X-{}-{kind}", self.application_name)
    }
}
