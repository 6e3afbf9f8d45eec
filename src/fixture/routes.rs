//! Fixture route data
//!
//! Every literal below is served byte-for-byte. Mixed-case directives,
//! doubled spaces and the odd header name on `/csp28` are fixture content
//! for exercising case-insensitive CSP parsing in clients.

use super::policy::{HeaderLiteral, DEFAULT_FILE};

pub const CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";
pub const CACHE_CONTROL: &str = "Cache-Control";
pub const NO_STORE: &str = "no-store";

/// Header layout of a fixture route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// `Content-Security-Policy` only
    Csp(&'static str),
    /// `Content-Security-Policy` plus `Cache-Control: no-store`
    CspNoStore(&'static str),
    /// `Cache-Control: no-store` with no policy at all
    NoStoreOnly,
    /// Policy delivered under a non-standard header name
    CustomHeader {
        name: &'static str,
        policy: &'static str,
    },
    /// `Content-Security-Policy` on a page other than the default one
    CspFile {
        policy: &'static str,
        file: &'static str,
    },
}

impl Preset {
    pub const fn file(self) -> &'static str {
        match self {
            Self::CspFile { file, .. } => file,
            _ => DEFAULT_FILE,
        }
    }

    pub fn headers(self) -> Vec<HeaderLiteral> {
        let csp = |value| HeaderLiteral {
            name: CONTENT_SECURITY_POLICY,
            value,
        };
        let no_store = HeaderLiteral {
            name: CACHE_CONTROL,
            value: NO_STORE,
        };

        match self {
            Self::Csp(policy) | Self::CspFile { policy, .. } => vec![csp(policy)],
            Self::CspNoStore(policy) => vec![csp(policy), no_store],
            Self::NoStoreOnly => vec![no_store],
            Self::CustomHeader { name, policy } => vec![HeaderLiteral {
                name,
                value: policy,
            }],
        }
    }
}

/// One row of the fixture table
#[derive(Debug, Clone, Copy)]
pub struct FixtureRoute {
    pub path: &'static str,
    pub preset: Preset,
}

const fn route(path: &'static str, preset: Preset) -> FixtureRoute {
    FixtureRoute { path, preset }
}

/// Default entry for `/`, kept apart from the numbered routes
pub const ROOT: FixtureRoute = route("/", Preset::Csp("script-src 'self'; object-src 'none'"));

/// Numbered fixture routes in registration order
pub const ROUTES: &[FixtureRoute] = &[
    route(
        "/login1",
        Preset::Csp("script-src https: 'self' ; object-src 'none'"),
    ),
    route(
        "/login2",
        Preset::Csp("default-src https: 'self' ; object-src 'none'"),
    ),
    route(
        "/login3",
        Preset::Csp("script-src https: 'unsafe-inline' ; object-src 'none'"),
    ),
    route(
        "/login4",
        Preset::Csp("default-src https: 'unsafe-inline' ; object-src 'none'"),
    ),
    route(
        "/login5",
        Preset::Csp("script-src https: 'unsafe-inline' 'strict-dynamic' ; object-src 'none'"),
    ),
    route(
        "/login6",
        Preset::Csp("default-src https: 'unsafe-inline' 'strict-dynamic' ; object-src 'none'"),
    ),
    route(
        "/login7",
        Preset::Csp("default-src https: 'self'; script-src https: 'self'; object-src 'none'"),
    ),
    route(
        "/login8",
        Preset::Csp("default-src https: 'unsafe-inline' 'self'; script-src https: 'self'; object-src 'none'"),
    ),
    route(
        "/login9",
        Preset::Csp("default-src https: 'self'; script-src https: 'unsafe-inline'; object-src 'none'"),
    ),
    route(
        "/login10",
        Preset::Csp("default-src https: 'unsafe-inline'; script-src https: 'unsafe-inline'; object-src 'none'"),
    ),
    route(
        "/login11",
        Preset::Csp("default-src https: 'unsafe-inline' 'strict-dynamic' ; script-src https: 'self'; object-src 'none'"),
    ),
    route(
        "/login12",
        Preset::Csp("default-src https: 'self'; script-src https: 'unsafe-inline'  'strict-dynamic' ; object-src 'none'"),
    ),
    route(
        "/login13",
        Preset::Csp("script-src https: 'unsafe-inline' 'unsafe-eval' ; object-src 'none'"),
    ),
    route(
        "/login14",
        Preset::Csp("script-src https: 'unsafe-inline' 'unsafe-eval'  'strict-dynamic' ; object-src 'none'"),
    ),
    route(
        "/login15",
        Preset::Csp("style-src 'self'; object-src 'none'"),
    ),
    route(
        "/login16",
        Preset::Csp("script-src https: 'unsafe-inline' 'self' ; object-src 'none'"),
    ),
    route(
        "/login17",
        Preset::Csp("default-src https: 'unsafe-inline' 'self' ; object-src 'none'"),
    ),
    route(
        "/login18",
        Preset::Csp("default-src https: 'unsafe-inline' 'strict-dynamic'; script-src https: 'unsafe-inline'; object-src 'none'"),
    ),
    route(
        "/login19",
        Preset::Csp("default-src https: 'unsafe-inline' ; script-src https: 'unsafe-inline' 'strict-dynamic' ; object-src 'none'"),
    ),
    route(
        "/login1x",
        Preset::Csp("script-src  https: 'nonce-dcd7d07a8645fca5bfc7ed3eflogin1x' 'self' ; object-src 'none'"),
    ),
    route(
        "/login2x",
        Preset::Csp("default-src  https: 'nonce-dcd7d07a8645fca5bfc7ed3eflogin2x' 'self' ; object-src 'none'"),
    ),
    route(
        "/login3x",
        Preset::Csp("script-src https: 'nonce-dcd7d07a8645fca5bfc7ed3eflogin3x' 'unsafe-inline' ; object-src 'none'"),
    ),
    route(
        "/login4x",
        Preset::Csp("default-src https: 'nonce-dcd7d07a8645fca5bfc7ed3eflogin4x' 'unsafe-inline' ; object-src 'none'"),
    ),
    route(
        "/login5x",
        Preset::Csp("script-src https: 'nonce-dcd7d07a8645fca5bfc7ed3eflogin5x' 'unsafe-inline' 'strict-dynamic' ; object-src 'none'"),
    ),
    route(
        "/login6x",
        Preset::Csp("default-src https: 'nonce-dcd7d07a8645fca5bfc7ed3eflogin6x' 'unsafe-inline' 'strict-dynamic' ; object-src 'none'"),
    ),
    route(
        "/login7x",
        Preset::Csp("default-src https: 'nonce-dcd7d07a8645fca5bfc7ed3eflogin7x' 'self'; script-src https: 'self'; object-src 'none'"),
    ),
    route(
        "/login8x",
        Preset::Csp("default-src https: 'nonce-dcd7d07a8645fca5bfc7ed3eflogin8x' 'unsafe-inline' 'self'; script-src https: 'self'; object-src 'none'"),
    ),
    route(
        "/login9x",
        Preset::Csp("default-src https: 'nonce-dcd7d07a8645fca5bfc7ed3eflogin9x' 'self'; script-src https: 'unsafe-inline'; object-src 'none'"),
    ),
    route(
        "/login10x",
        Preset::Csp("default-src https: 'nonce-dcd7d07a8645fca5bfc7ed3elogin10x' 'unsafe-inline'; script-src https: 'unsafe-inline'; object-src 'none'"),
    ),
    route(
        "/login11x",
        Preset::Csp("default-src https: 'nonce-dcd7d07a8645fca5bfc7ed3elogin11x' 'unsafe-inline' 'strict-dynamic' ; script-src https: 'self'; object-src 'none'"),
    ),
    route(
        "/login12x",
        Preset::Csp("default-src https: 'nonce-dcd7d07a8645fca5bfc7ed3elogin12x' 'self'; script-src https: 'unsafe-inline'  'strict-dynamic' ; object-src 'none'"),
    ),
    route(
        "/login13x",
        Preset::Csp("script-src https: 'nonce-dcd7d07a8645fca5bfc7ed3elogin13x' 'unsafe-inline' 'unsafe-eval' ; object-src 'none'"),
    ),
    route(
        "/login14x",
        Preset::Csp("script-src https: 'nonce-dcd7d07a8645fca5bfc7ed3elogin14x' 'unsafe-inline' 'unsafe-eval'  'strict-dynamic' ; object-src 'none'"),
    ),
    route(
        "/login15x",
        Preset::Csp("style-src 'nonce-dcd7d07a8645fca5bfc7ed3elogin15x' 'self'; object-src 'none'"),
    ),
    route(
        "/login16x",
        Preset::Csp("script-src https: 'nonce-dcd7d07a8645fca5bfc7ed3elogin16x' 'unsafe-inline' 'self' ; object-src 'none'"),
    ),
    route(
        "/login17x",
        Preset::Csp("default-src https: 'nonce-dcd7d07a8645fca5bfc7ed3elogin17x' 'unsafe-inline' 'self' ; object-src 'none'"),
    ),
    route(
        "/login18x",
        Preset::Csp("default-src https: 'nonce-dcd7d07a8645fca5bfc7ed3elogin18x' 'unsafe-inline' 'strict-dynamic'; script-src https: 'unsafe-inline'; object-src 'none'"),
    ),
    route(
        "/login19x",
        Preset::Csp("default-src https: 'nonce-dcd7d07a8645fca5bfc7ed3elogin19x' 'unsafe-inline' ; script-src https: 'unsafe-inline' 'strict-dynamic' ; object-src 'none'"),
    ),
    route(
        "/csp1",
        Preset::Csp("script-src https: 'unsafe-eval'; object-src 'none'"),
    ),
    route(
        "/csp2",
        Preset::Csp("script-src 'self'; object-src 'none'"),
    ),
    route(
        "/csp8",
        Preset::CspNoStore("script-src 'self'; object-src 'none'"),
    ),
    route(
        "/csp10",
        Preset::NoStoreOnly,
    ),
    route(
        "/csp11",
        Preset::CspNoStore("style-src 'self'; object-src 'none'"),
    ),
    route(
        "/csp12",
        Preset::CspNoStore("img-src 'self'; script-src 'self'; object-src 'none'"),
    ),
    route(
        "/csp13",
        Preset::CspNoStore("img-src 'self'; script-src 'strict-dynamic' 'self'; object-src 'none'"),
    ),
    route(
        "/csp14",
        Preset::CspNoStore("img-src 'self'; script-src 'unsafe-inline' 'self'; object-src 'none'"),
    ),
    route(
        "/csp15",
        Preset::CspNoStore("img-src 'self'; script-src 'strict-dynamic' 'unsafe-inline' 'self'; object-src 'none'"),
    ),
    route(
        "/csp16",
        Preset::CspNoStore("img-src 'self'; default-src 'self'; object-src 'none'"),
    ),
    route(
        "/csp17",
        Preset::CspNoStore("img-src 'self'; default-src 'strict-dynamic' 'self'; object-src 'none'"),
    ),
    route(
        "/csp18",
        Preset::CspNoStore("img-src 'self'; default-src 'unsafe-inline' 'self'; object-src 'none'"),
    ),
    route(
        "/csp19",
        Preset::CspNoStore("img-src 'self'; default-src 'strict-dynamic' 'unsafe-inline' 'self'; object-src 'none'"),
    ),
    route(
        "/csp20",
        Preset::CspNoStore("default-src 'self'; script-src 'self'; object-src 'none'"),
    ),
    route(
        "/csp21",
        Preset::CspNoStore("default-src 'self'; script-src 'strict-dynamic' 'self'; object-src 'none'"),
    ),
    route(
        "/csp22",
        Preset::CspNoStore("default-src 'self'; script-src 'unsafe-inline' 'self'; object-src 'none'"),
    ),
    route(
        "/csp23",
        Preset::CspNoStore("default-src 'self'; script-src 'strict-dynamic' 'unsafe-inline' 'self'; object-src 'none'"),
    ),
    route(
        "/csp24",
        Preset::CspNoStore("img-src 'self'; ScRiPt-SrC 'self'; object-src 'none'"),
    ),
    route(
        "/csp25",
        Preset::CspNoStore("img-src 'self'; script-src 'UnSaFe-InLiNe' 'self'; object-src 'none'"),
    ),
    route(
        "/csp26",
        Preset::CspNoStore("img-src 'self'; DeFaUlT-SrC 'self'; object-src 'none'"),
    ),
    route(
        "/csp27",
        Preset::CspNoStore("img-src 'self'; default-src 'UnSaFe-InLiNe' 'self'; object-src 'none'"),
    ),
    route(
        "/csp28",
        Preset::CustomHeader {
            name: "CONtENT-SECUrITY-POLiCY",
            policy: "script-src 'self'; object-src 'none'",
        },
    ),
    route(
        "/csp40",
        Preset::Csp("script-src https: 'unsafe-eval' ; object-src 'none'"),
    ),
    route(
        "/csp41",
        Preset::Csp("script-src https: 'strict-dynamic' 'unsafe-eval' ; object-src 'none'"),
    ),
    route(
        "/csp42",
        Preset::CspFile {
            policy: "script-src 'unsafe-inline' ; object-src 'none'",
            file: "index1.html",
        },
    ),
    route(
        "/csp43",
        Preset::CspFile {
            policy: "script-src 'nonce-5843b9e95a432059d901fb701597edf0' ; object-src 'none'",
            file: "index1.html",
        },
    ),
    route(
        "/csp44",
        Preset::CspFile {
            policy: "script-src 'nonce-5843b9e95a432059d901fb701597edf0' 'unsafe-inline' ; object-src 'none'",
            file: "index1.html",
        },
    ),
    route(
        "/csp45",
        Preset::CspNoStore("img-src 'self'; default-src 'nonce-5843b9e95a432059d901fb701597edf0'; object-src 'none'"),
    ),
    route(
        "/csp46",
        Preset::CspNoStore("img-src 'self'; default-src 'nonce-5843b9e95a432059d901fb701597edf0' 'unsafe-inline'; object-src 'none'"),
    ),
];
