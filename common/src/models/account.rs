// common/src/models/account.rs

/// A preset portal account with its assigned virtual machine and
/// per-session service endpoints.
///
/// The table is fixed at compile time and never leaves the session
/// layer; the API only ever sees the derived session fields.
#[derive(Debug, Clone, Copy)]
pub struct Account {
    pub student_id: &'static str,
    pub password: &'static str,
    pub vm_number: &'static str,
    pub edge_server_url: &'static str,
    pub dify_url: &'static str,
}

/// Preset test accounts.
const ACCOUNTS: &[Account] = &[
    Account {
        student_id: "admin",
        password: "admin",
        vm_number: "1",
        edge_server_url: "http://39.104.80.221:25006/#/login",
        dify_url: "https://vd01.zime.edu.cn/dify/",
    },
    Account {
        student_id: "adminkm",
        password: "admin",
        vm_number: "2",
        edge_server_url: "http://localhost:8080",
        dify_url: "http://115.236.67.186:45632/",
    },
];

/// Look up an account by exact student id + password match.
/// First match wins if the table ever carries duplicates.
pub fn validate_credentials(student_id: &str, password: &str) -> Option<&'static Account> {
    ACCOUNTS
        .iter()
        .find(|acc| acc.student_id == student_id && acc.password == password)
}
