use crate::context::UserInfo;
use crate::core::models::user::Claim;
use crate::core::tokener::{Payload, Tokener};
use crate::error::Error;
use crate::impls::tokener::jwt::JWT;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::HttpMessage;
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};

const BEARER: &str = "Bearer ";

/// Rejects requests without a valid bearer token and hands the verified
/// principal to the wrapped service as a `UserInfo` extension.
pub(crate) struct JWTMiddleware {
    tokener: JWT,
}

impl JWTMiddleware {
    pub fn new(tokener: JWT) -> Self {
        Self { tokener }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JWTMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Transform = JWTService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JWTService {
            tokener: self.tokener.clone(),
            next_service: service,
        }))
    }
}

pub struct JWTService<S> {
    tokener: JWT,
    next_service: S,
}

impl<S> JWTService<S> {
    fn authenticate(&self, req: &ServiceRequest) -> Result<UserInfo, Error> {
        let header = req.headers().get(AUTHORIZATION).ok_or(Error::Unauthenticated)?;
        let token = header
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix(BEARER))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(Error::Unauthenticated)?;
        let claim: Claim = self.tokener.verify_token(token)?;
        log::debug!("{} {} authenticated as {}", req.method(), req.path(), claim.subject());
        Ok(claim.into())
    }
}

impl<S, B> Service<ServiceRequest> for JWTService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(next_service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match self.authenticate(&req) {
            Err(e) => {
                log::debug!("{} {} rejected: {}", req.method(), req.path(), e);
                let res = req.error_response(e).map_into_right_body();
                Box::pin(async move { Ok(res) })
            }
            Ok(user) => {
                req.extensions_mut().insert(user);
                let res_fut = self.next_service.call(req);
                Box::pin(async move { res_fut.await.map(ServiceResponse::map_into_left_body) })
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::models::user::Role;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};
    use chrono::{Duration, Utc};

    async fn whoami(user: UserInfo) -> HttpResponse {
        HttpResponse::Ok().body(user.id)
    }

    fn token(jwt: &JWT, exp: i64) -> String {
        jwt.gen_token(&Claim {
            id: "u7".into(),
            email: "u7@example.com".into(),
            role: Role::User,
            exp,
        })
        .unwrap()
    }

    #[actix_web::test]
    async fn test_gate() {
        let jwt = JWT::new(b"middleware".to_vec());
        let app = test::init_service(
            App::new().service(web::resource("/me").wrap(JWTMiddleware::new(jwt.clone())).route(web::get().to(whoami))),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/me").to_request()).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get().uri("/me").insert_header((AUTHORIZATION, "Bearer garbage")).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

        let expired = token(&jwt, (Utc::now() - Duration::hours(2)).timestamp());
        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header((AUTHORIZATION, format!("Bearer {}", expired)))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

        let valid = token(&jwt, (Utc::now() + Duration::hours(1)).timestamp());
        let req = test::TestRequest::get().uri("/me").insert_header((AUTHORIZATION, valid.clone())).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/me")
            .insert_header((AUTHORIZATION, format!("Bearer {}", valid)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "u7");
    }
}
