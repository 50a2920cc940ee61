use chrono::NaiveDateTime;
use diesel::prelude::*;

#[derive(Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::mysql::Mysql))]
pub struct User {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub age: String,
    pub phone: String,
    pub gender: String,
    pub reset_token: Option<String>,
    pub token_expiry: Option<NaiveDateTime>,
}
