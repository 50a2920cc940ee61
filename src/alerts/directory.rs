use crate::errors::DirectoryError;
use crate::models::emergency_contact::EmergencyContact;
use crate::schema::{emergency_contacts, users};
use async_trait::async_trait;
use diesel::{
    ExpressionMethods, MysqlConnection, OptionalExtension, QueryDsl, RunQueryDsl,
    r2d2::{ConnectionManager, Pool},
};

/// What the alert core needs to know about a user: the display name for
/// message templates and the ordered emergency-contact list.
#[derive(Clone, Debug)]
pub struct AlertProfile {
    pub display_name: String,
    pub contacts: Vec<EmergencyContact>,
}

/// "Get user profile by identity", the profile store seen as a black box.
#[async_trait]
pub trait ProfileDirectory: Send + Sync {
    async fn find(&self, email: &str) -> Result<Option<AlertProfile>, DirectoryError>;
}

pub struct MysqlDirectory {
    pool: Pool<ConnectionManager<MysqlConnection>>,
}

impl MysqlDirectory {
    pub fn new(pool: Pool<ConnectionManager<MysqlConnection>>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileDirectory for MysqlDirectory {
    async fn find(&self, lookup_email: &str) -> Result<Option<AlertProfile>, DirectoryError> {
        let connection = &mut self
            .pool
            .get()
            .map_err(|error| DirectoryError::Pool(error.to_string()))?;

        let Some((user_id, display_name)) = users::table
            .filter(users::email.eq(lookup_email))
            .select((users::id, users::name))
            .first::<(i32, String)>(connection)
            .optional()?
        else {
            return Ok(None);
        };

        let contacts = emergency_contacts::table
            .filter(emergency_contacts::user_id.eq(user_id))
            .order(emergency_contacts::id.asc())
            .select((
                emergency_contacts::name,
                emergency_contacts::phone,
                emergency_contacts::relation,
            ))
            .load::<EmergencyContact>(connection)?;

        Ok(Some(AlertProfile {
            display_name,
            contacts,
        }))
    }
}
