use crate::context::UserInfo;
use crate::core::auth::{hash_password, random_salt, verify_password};
use crate::core::models::user::{AdminSeed, Claim, Insert as UserInsert, Login, Profile, Register, Role, Session, User};
use crate::core::policy::{authorize, Operation};
use crate::core::ports::repository::{Store, UserCommon};
use crate::core::tokener::Tokener;
use crate::error::Error;
use chrono::Duration;

fn issue<T>(tokener: &T, ttl: Duration, user: &User) -> Result<Session, Error>
where
    T: Tokener<Claim>,
{
    let token = tokener.gen_token(&Claim::new(user, ttl))?;
    Ok(Session {
        token,
        user: user.into(),
    })
}

fn required(field: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::InvalidInput(format!("{} is required", field)));
    }
    Ok(())
}

pub async fn register<S, T>(store: &mut S, tokener: &T, ttl: Duration, data: Register) -> Result<Session, Error>
where
    S: Store,
    T: Tokener<Claim>,
{
    authorize(Operation::Register, None)?;
    required("email", &data.email)?;
    required("password", &data.password)?;
    required("name", &data.name)?;
    let salt = random_salt();
    let user = UserCommon::insert(
        store,
        UserInsert {
            email: data.email,
            password: hash_password(&data.password, &salt),
            salt,
            name: data.name.trim().to_owned(),
            role: Role::User,
        },
    )
    .await?;
    log::info!("registered user {}", user.id);
    issue(tokener, ttl, &user)
}

pub async fn login<S, T>(store: &mut S, tokener: &T, ttl: Duration, data: Login) -> Result<Session, Error>
where
    S: Store,
    T: Tokener<Claim>,
{
    authorize(Operation::Login, None)?;
    let user = UserCommon::get_by_email(store, &data.email).await?.ok_or(Error::InvalidCredentials)?;
    if !verify_password(&data.password, &user.salt, &user.password) {
        log::warn!("failed login for user {}", user.id);
        return Err(Error::InvalidCredentials);
    }
    issue(tokener, ttl, &user)
}

pub async fn me<S>(store: &mut S, user: &UserInfo) -> Result<Profile, Error>
where
    S: Store,
{
    authorize(Operation::Me, Some(user))?;
    let user = UserCommon::get(store, &user.id).await?;
    Ok((&user).into())
}

/// Creates the configured admin account unless a user with that email exists.
pub async fn seed_admin<S>(store: &mut S, seed: &AdminSeed) -> Result<(), Error>
where
    S: Store,
{
    if UserCommon::get_by_email(store, &seed.email).await?.is_some() {
        log::debug!("admin {} already present", seed.email);
        return Ok(());
    }
    let salt = random_salt();
    let admin = UserCommon::insert(
        store,
        UserInsert {
            email: seed.email.clone(),
            password: hash_password(&seed.password, &salt),
            salt,
            name: seed.name.clone(),
            role: Role::Admin,
        },
    )
    .await?;
    log::info!("seeded admin user {}", admin.id);
    Ok(())
}
