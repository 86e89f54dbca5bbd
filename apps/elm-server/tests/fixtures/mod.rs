use elm_core::config::core_config::{self, AppConfig};
use elm_server::ServerConfig;

pub const COURSE_ID: &str = "course-v1:OpenedX+DemoX+2024";
pub const EMPTY_COURSE_ID: &str = "course-v1:OpenedX+Empty+2024";

pub fn create_config() -> AppConfig<ServerConfig> {
    let root = std::env!("CARGO_MANIFEST_DIR");

    let mut app_config: AppConfig<ServerConfig> = core_config::AppConfig::from_yaml([
        std::fs::read_to_string(format!("{root}/../../config/config.yml")).unwrap(),
        indoc::indoc! {"
            elmCredentialsDefaults:
                issuerId: 'test-issuer'
        "}
        .to_owned(),
    ])
    .unwrap();

    app_config.app = ServerConfig {
        server_ip: None,
        server_port: None,
        trace_json: None,
        trace_level: Some("debug,hyper=error".into()),
        hide_error_response_cause: true,
        host_snapshot_path: format!("{root}/tests/fixtures/host-snapshot.yml").into(),
    };

    app_config
}
