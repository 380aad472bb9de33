/// Usernames reach us as path segments and may arrive percent-encoded.
pub fn decode_all(input: &str) -> Option<String> {
    urlencoding::decode(input).ok().map(|cow| cow.into_owned())
}
