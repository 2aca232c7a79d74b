// src/services/auth.rs

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::auth::{Claims, LoginPayload, UpdateProfilePayload, User, UserRole},
    store::{seed, KeyValueStore, SESSION_KEY},
};

#[derive(Clone)]
pub struct AuthService {
    kv: Arc<dyn KeyValueStore>,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(kv: Arc<dyn KeyValueStore>, jwt_secret: String) -> Self {
        Self { kv, jwt_secret }
    }

    /// Login de demonstração: não há senha, o cargo vem da tela.
    /// Cargos que não são Owner já chegam com o segmento "Varejo" e pulam
    /// o onboarding; o Owner entra sem segmento e cai na escolha de modelo.
    pub fn login(&self, payload: LoginPayload) -> Result<(String, User), AppError> {
        let mut user = seed::demo_user(payload.role);

        if let Some(name) = payload.name {
            user.name = name;
        }
        if let Some(email) = payload.email {
            user.email = email;
        }
        if let Some(company_name) = payload.company_name {
            user.company_name = Some(company_name);
        }

        if payload.role != UserRole::Owner {
            user.industry = Some("Varejo".to_string());
        }

        // Sessão única: um novo login sobrescreve a anterior.
        self.persist_session(&user)?;
        let token = self.create_token(user.id)?;

        tracing::info!("🔑 Sessão iniciada para {} ({:?})", user.email, user.role);
        Ok((token, user))
    }

    /// Valida o token e devolve o usuário da sessão persistida.
    /// O token só vale enquanto a sessão gravada for a dele: um login
    /// posterior (ou um logout) derruba tokens antigos.
    pub fn validate_token(&self, token: &str) -> Result<User, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        let user = self.current_session()?;
        if user.id != token_data.claims.sub {
            return Err(AppError::SessionNotFound);
        }

        Ok(user)
    }

    pub fn current_session(&self) -> Result<User, AppError> {
        let raw = self.kv.get(SESSION_KEY).ok_or(AppError::SessionNotFound)?;
        serde_json::from_str(&raw).map_err(|e| {
            tracing::error!("Sessão gravada ilegível: {}", e);
            AppError::SessionNotFound
        })
    }

    pub fn persist_session(&self, user: &User) -> Result<(), AppError> {
        let raw = serde_json::to_string(user)
            .map_err(|e| anyhow::anyhow!("Falha ao serializar a sessão: {}", e))?;
        self.kv.set(SESSION_KEY, &raw);
        Ok(())
    }

    pub fn clear_session(&self) {
        self.kv.remove(SESSION_KEY);
    }

    /// Edição de perfil. O cargo nunca muda por aqui: trocar de cargo
    /// exige um novo login.
    pub fn update_profile(
        &self,
        user: &User,
        payload: UpdateProfilePayload,
    ) -> Result<User, AppError> {
        let mut updated = user.clone();

        if let Some(name) = payload.name {
            updated.name = name;
        }
        if let Some(email) = payload.email {
            updated.email = email;
        }
        if let Some(phone) = payload.phone {
            updated.phone = Some(phone);
        }
        if let Some(company_name) = payload.company_name {
            updated.company_name = Some(company_name);
        }

        self.persist_session(&updated)?;
        Ok(updated)
    }

    fn create_token(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: user_id,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        // Usa '?' para um tratamento de erro mais limpo
        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}
