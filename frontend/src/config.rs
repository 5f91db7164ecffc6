/// Backend origin, fixed at build time. Empty means same origin.
pub const API_BASE_URL: &str = match option_env!("TRAVEL_MEMORY_API_URL") {
    Some(url) => url,
    None => "",
};

pub fn api_url(path: &str) -> String {
    join_url(API_BASE_URL, path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
