use chrono::Utc;
use lydia::lydia_auth::{AuthError, Claims, Credential, TokenIssuer, TokenValidator};
use lydia::lydia_config::JwtConfig;
use lydia::lydia_models::AccountId;

fn get_test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        access_token_expiry: 86400,
        leeway: 0,
    }
}

#[test]
fn test_issue_token_shape() {
    let token = TokenIssuer::new(&get_test_jwt_config())
        .issue(&AccountId::new("u1"))
        .unwrap();

    assert_eq!(token.split('.').count(), 3);
}

#[test]
fn test_issued_claims() {
    let config = get_test_jwt_config();
    let before = Utc::now().timestamp();
    let token = TokenIssuer::new(&config).issue(&AccountId::new("u1")).unwrap();

    let claims = TokenValidator::new(&config)
        .validate(&Credential::new(token))
        .unwrap();

    assert_eq!(claims.sub, "u1");
    assert!(claims.iat >= before);
    assert_eq!(claims.exp, claims.iat + 86400);
}

#[test]
fn test_verify_token_wrong_secret() {
    let token = TokenIssuer::new(&get_test_jwt_config())
        .issue(&AccountId::new("u1"))
        .unwrap();

    let other = JwtConfig {
        secret: "different_secret".to_string(),
        ..get_test_jwt_config()
    };
    let result = TokenValidator::new(&other).validate(&Credential::new(token));

    assert!(matches!(result, Err(AuthError::InvalidCredential)));
}

#[test]
fn test_verify_token_tampered_payload() {
    let config = get_test_jwt_config();
    let token = TokenIssuer::new(&config).issue(&AccountId::new("u1")).unwrap();
    let forged = TokenIssuer::new(&config).issue(&AccountId::new("admin")).unwrap();

    // Signature of one token on the payload of another
    let mut parts: Vec<&str> = token.split('.').collect();
    let forged_parts: Vec<&str> = forged.split('.').collect();
    parts[1] = forged_parts[1];
    let spliced = parts.join(".");

    let result = TokenValidator::new(&config).validate(&Credential::new(spliced));
    assert!(matches!(result, Err(AuthError::InvalidCredential)));
}

#[test]
fn test_verify_token_expired() {
    let config = get_test_jwt_config();
    let now = Utc::now().timestamp();
    let token = TokenIssuer::new(&config)
        .sign(&Claims {
            sub: "u1".to_string(),
            iat: now - 90000,
            exp: now - 3600,
        })
        .unwrap();

    let result = TokenValidator::new(&config).validate(&Credential::new(token));
    assert!(matches!(result, Err(AuthError::InvalidCredential)));
}

#[test]
fn test_credential_debug_is_redacted() {
    let credential = Credential::new("eyJhbGciOiJIUzI1NiJ9.secret.sig");
    assert_eq!(format!("{credential:?}"), "Credential(***)");
}
