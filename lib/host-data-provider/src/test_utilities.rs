use crate::HostDataLayer;
use crate::entity::HostSnapshot;

pub const COURSE_ID: &str = "course-v1:OpenedX+DemoX+2024";

pub fn dummy_snapshot_yaml() -> &'static str {
    indoc::indoc! {"
        courses:
          - id: 'course-v1:OpenedX+DemoX+2024'
            org: 'OpenedX'
            displayName: 'Demo Course'
            otherCourseSettings:
              elm_credential_org_country_code: 'PRT'
        users:
          - username: 'alice'
            email: 'alice@example.com'
            name: 'Alice Liddell'
          - username: 'bob'
            email: 'Bob@Example.com'
            name: 'Bob'
          - username: 'instructor'
            email: 'instructor@example.com'
            name: 'Course Instructor'
          - username: 'admin'
            email: 'admin@example.com'
            isStaff: true
          - username: 'root'
            email: 'root@example.com'
            isSuperuser: true
        roles:
          'course-v1:OpenedX+DemoX+2024':
            instructor: ['instructor']
        sessions:
          token-alice: 'alice'
          token-instructor: 'instructor'
          token-dangling: 'ghost'
        enrollments:
          'course-v1:OpenedX+DemoX+2024': ['alice', 'bob', 'admin', 'root', 'ghost']
        certificates:
          - username: 'alice'
            courseId: 'course-v1:OpenedX+DemoX+2024'
            createdDate: '2024-01-15T10:30:45Z'
            grade: 0.8765
    "}
}

pub fn setup_data_layer() -> HostDataLayer {
    let snapshot: HostSnapshot = serde_yaml::from_str(dummy_snapshot_yaml()).unwrap();
    HostDataLayer::build(snapshot).unwrap()
}
