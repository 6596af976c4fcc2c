use std::io::Write;

use crate::client::GithubClient;

/// Looks up one repository and prints its name, description and star count.
///
/// A network failure is printed as a single `Error:` line and is not an error
/// for the caller; only a failed write to `out` is.
pub async fn run(
    client: &GithubClient,
    owner: &str,
    repo: &str,
    out: &mut impl Write,
) -> std::io::Result<()> {
    match client.get_repo(owner, repo).await {
        Ok(info) => write!(out, "{info}"),
        Err(err) => {
            tracing::debug!(owner, repo, error = ?err, "repository lookup failed");
            writeln!(out, "Error: {err}")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use super::*;

    #[tokio::test]
    async fn network_failure_prints_single_error_line() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let client = GithubClient::new(&base).unwrap();
        let mut out = Vec::new();

        run(&client, "octocat", "Hello-World", &mut out)
            .await
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Error: "));
        assert_eq!(out.lines().count(), 1);
        assert!(!out.contains("Repository Name:"));
    }
}
