use std::collections::{HashMap, HashSet};

use anyhow::{Context, anyhow};
use elm_core::model::certificate::Certificate;
use elm_core::model::course::{Course, CourseKey};
use elm_core::model::user::User;
use elm_core::repository::error::DataLayerError;

use crate::HostData;
use crate::entity::{CertificateEntity, CourseEntity, HostSnapshot, UserEntity};

fn parse_course_key(id: &str) -> Result<CourseKey, DataLayerError> {
    id.parse::<CourseKey>()
        .with_context(|| format!("Invalid course id in host snapshot: `{id}`"))
        .map_err(DataLayerError::Db)
}

impl TryFrom<CourseEntity> for Course {
    type Error = DataLayerError;

    fn try_from(value: CourseEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            key: parse_course_key(&value.id)?,
            org: value.org,
            display_name: value.display_name,
            other_course_settings: value.other_course_settings,
        })
    }
}

impl From<UserEntity> for User {
    fn from(value: UserEntity) -> Self {
        Self {
            username: value.username,
            email: value.email,
            full_name: value.name,
            is_staff: value.is_staff,
            is_superuser: value.is_superuser,
        }
    }
}

impl TryFrom<CertificateEntity> for Certificate {
    type Error = DataLayerError;

    fn try_from(value: CertificateEntity) -> Result<Self, Self::Error> {
        match value.grade {
            Some(grade) if !(0.0..=1.0).contains(&grade) => {
                return Err(DataLayerError::Db(anyhow!(
                    "Grade {grade} of `{}` is outside 0.0..=1.0",
                    value.username
                )));
            }
            _ => {}
        }

        Ok(Self {
            created_date: value.created_date,
            grade: value.grade,
        })
    }
}

impl TryFrom<HostSnapshot> for HostData {
    type Error = DataLayerError;

    fn try_from(value: HostSnapshot) -> Result<Self, Self::Error> {
        let courses = value
            .courses
            .into_iter()
            .map(|entity| Course::try_from(entity).map(|course| (course.key.clone(), course)))
            .collect::<Result<HashMap<_, _>, _>>()?;

        let users: Vec<User> = value.users.into_iter().map(User::from).collect();
        let known_users: HashSet<&str> = users.iter().map(|user| user.username.as_str()).collect();

        let course_team = value
            .roles
            .into_iter()
            .map(|(course_id, roles)| {
                let team = roles.staff.into_iter().chain(roles.instructor).collect();
                Ok((parse_course_key(&course_id)?, team))
            })
            .collect::<Result<HashMap<_, HashSet<String>>, DataLayerError>>()?;

        let enrollments = value
            .enrollments
            .into_iter()
            .map(|(course_id, usernames)| Ok((parse_course_key(&course_id)?, usernames)))
            .collect::<Result<HashMap<_, _>, DataLayerError>>()?;

        let mut certificates = HashMap::new();
        for entity in value.certificates {
            if !known_users.contains(entity.username.as_str()) {
                return Err(DataLayerError::Db(anyhow!(
                    "Certificate of unknown user `{}`",
                    entity.username
                )));
            }

            let course_key = parse_course_key(&entity.course_id)?;
            certificates.insert(
                (entity.username.clone(), course_key),
                Certificate::try_from(entity)?,
            );
        }

        Ok(Self {
            courses,
            users,
            course_team,
            sessions: value.sessions.into_iter().collect(),
            enrollments,
            certificates,
        })
    }
}
