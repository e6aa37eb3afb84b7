/*!
 * Authentication / authorization services
 *
 * Responsibility:
 * - access_jwt: bearer token の検証 (署名 / iss / aud / exp, leeway 0)
 * - token_issuer: デモ用 login endpoint の token 発行
 * - policy: 名前付き policy と requirement の評価
 * - principal: リクエストに紐づく認証済み主体
 */

pub mod access_jwt;
pub mod policy;
pub mod principal;
pub mod token_issuer;

pub use access_jwt::AuthService;
pub use principal::Principal;
pub use token_issuer::TokenIssuer;
