//! User domain models and parameters.
//!
//! Users authenticate with email and password. Their role decides which operations they may
//! run; `SalesRep` users additionally own a sales rep profile. The user whose email matches
//! the configured super-admin email is the predefined admin.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};

use crate::{
    model::{
        auth::AuthUserDto,
        user::{CreateUserDto, PaginatedUsersDto, RoleDto, UpdateUserDto, UserDto, UserQueryDto},
    },
    server::{
        error::{internal::InternalError, AppError},
        model::pagination::{normalize_search, Page, PageRequest},
    },
};

pub const MIN_USERNAME_LEN: usize = 4;
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    SalesRep,
}

impl Role {
    /// Value stored in the `users.role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::SalesRep => "SalesRep",
        }
    }

    pub fn into_dto(self) -> RoleDto {
        match self {
            Role::Admin => RoleDto::Admin,
            Role::SalesRep => RoleDto::SalesRep,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Admin" => Ok(Role::Admin),
            "SalesRep" => Ok(Role::SalesRep),
            other => Err(InternalError::UnknownRole(other.to_string())),
        }
    }
}

impl From<RoleDto> for Role {
    fn from(dto: RoleDto) -> Self {
        match dto {
            RoleDto::Admin => Role::Admin,
            RoleDto::SalesRep => Role::SalesRep,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::Internal(UnknownRole))` - The stored role string is not recognized
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = entity.role.parse::<Role>()?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            username: entity.username,
            password_hash: entity.password_hash,
            role,
            created_at: entity.created_at,
        })
    }

    /// Whether this user is the configured super-admin.
    pub fn is_predefined_admin(&self, superadmin_email: Option<&str>) -> bool {
        superadmin_email.is_some_and(|email| email.eq_ignore_ascii_case(&self.email))
    }

    pub fn into_dto(self, superadmin_email: Option<&str>) -> UserDto {
        UserDto {
            is_predefined_admin: self.is_predefined_admin(superadmin_email),
            id: self.id,
            email: self.email,
            username: self.username,
            role: self.role.into_dto(),
            created_at: self.created_at,
        }
    }

    pub fn into_auth_dto(self, superadmin_email: Option<&str>) -> AuthUserDto {
        AuthUserDto {
            is_predefined_admin: self.is_predefined_admin(superadmin_email),
            id: self.id,
            email: self.email,
            username: self.username,
            role: self.role.into_dto(),
        }
    }
}

impl Page<User> {
    pub fn into_dto(self, superadmin_email: Option<&str>) -> PaginatedUsersDto {
        let meta = self.meta_dto();
        PaginatedUsersDto {
            data: self
                .items
                .into_iter()
                .map(|user| user.into_dto(superadmin_email))
                .collect(),
            meta,
        }
    }
}

/// Validated filter for user and sales rep list endpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub page: PageRequest,
    pub search: Option<String>,
}

impl UserFilter {
    pub fn from_dto(dto: UserQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            page: PageRequest::new(dto.page, dto.limit)?,
            search: normalize_search(dto.search),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserParams {
    pub email: String,
    pub username: String,
    pub password: String,
    pub role: Role,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            email: validated_email(dto.email)?,
            username: validated_username(dto.username)?,
            password: validated_password(dto.password)?,
            role: dto.role.into(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserParams {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            email: dto.email.map(validated_email).transpose()?,
            username: dto.username.map(validated_username).transpose()?,
            password: dto.password.map(validated_password).transpose()?,
            role: dto.role.map(Role::from),
        })
    }
}

/// User row to insert, password already hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUserRecord {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

/// Column changes for an existing user; `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserRecordChanges {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<Role>,
}

/// Lowercases an email and checks it has the `local@domain.tld` shape.
fn validated_email(email: String) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(AppError::BadRequest("email must be a valid email".to_string()));
    }
    Ok(email)
}

fn validated_username(username: String) -> Result<String, AppError> {
    let username = username.trim().to_string();
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(AppError::BadRequest(format!(
            "username must be at least {} characters",
            MIN_USERNAME_LEN
        )));
    }
    Ok(username)
}

fn validated_password(password: String) -> Result<String, AppError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::BadRequest(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(password)
}
