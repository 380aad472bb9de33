pub mod session;
pub mod user;

/*
 Accounts are self-service: anyone can register a username/email pair, and
 both must be unused. Logging in with email + password mints a session whose
 secret the client holds as an opaque token ("eat").
 Suspension is the only privileged operation: admins can suspend anyone,
 regular users nobody. A suspended account keeps its row (and its unique
 username/email) but can no longer log in or act.
 */
