/// Number of questions returned per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Category used by the quiz when the client does not pick one
pub const DEFAULT_QUIZ_CATEGORY: &str = "science";

// =============================================================================
// CORS RESPONSE HEADERS
// =============================================================================

/// Value of `Access-Control-Allow-Headers` sent on every response
pub const ALLOWED_HEADERS: &str = "Content-Type,Authorization,true";

/// Value of `Access-Control-Allow-Methods` sent on every response
pub const ALLOWED_METHODS: &str = "GET,POST,DELETE";
