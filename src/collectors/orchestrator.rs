use crate::{
    collectors::{
        CacheCollector,
        Collector,
        ConnectionsCollector,
        ServerCollector,
        StatusFetcher,
        UpstreamCollector,
    },
    config::Config,
    metrics::StatusSnapshot,
};
use eyre::{
    Context as _,
    Result,
};
use std::io::Write;
use tracing::{
    debug,
    info,
};

/// Runs fetch, decode and format in order and writes the sender payload.
pub struct Orchestrator {
    fetcher: StatusFetcher,
}

impl Orchestrator {
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = StatusFetcher::new(config).wrap_err("Failed to create the HTTP client")?;
        Ok(Self { fetcher })
    }

    /// Fetches one snapshot and writes it to `out`. Nothing is written unless
    /// the snapshot was fetched and decoded in full.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let snapshot = self
            .fetcher
            .fetch_snapshot()
            .await
            .wrap_err_with(|| format!("Failed to collect {}", self.fetcher.uri()))?;

        let payload = format(&snapshot);
        out.write_all(payload.as_bytes()).wrap_err("Failed to write metrics")?;
        out.flush().wrap_err("Failed to write metrics")?;

        info!(lines = payload.lines().count(), "metrics written");
        Ok(())
    }
}

/// Renders a snapshot: connection lines, then the discovery documents, then
/// the server, upstream and cache zone lines.
pub fn format(snapshot: &StatusSnapshot) -> String {
    let connections = ConnectionsCollector::new(snapshot);
    let servers = ServerCollector::new(snapshot);
    let upstreams = UpstreamCollector::new(snapshot);
    let caches = CacheCollector::new(snapshot);
    let sections: [&dyn Collector; 3] = [&servers, &upstreams, &caches];

    let mut output = connections.format();

    for section in sections {
        if let Some(line) = section.discovery().and_then(|document| document.to_line()) {
            output.push_str(&line);
            output.push('\n');
        }
    }

    for section in sections {
        let lines = section.format();
        debug!(collector = section.name(), lines = lines.lines().count(), "formatted section");
        output.push_str(&lines);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        collectors::status_fetcher::tests::spawn_status_server,
        metrics::{
            CacheStats,
            Connections,
            ServerResponses,
            ServerStats,
            StatusClasses,
            UpstreamMemberStats,
        },
    };
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    const WWW_SCENARIO: &str = "\
- nginx.status[connections,active] 5
- nginx.status[connections,reading] 0
- nginx.status[connections,waiting] 2
- nginx.status[connections,writing] 1
- nginx.status[connections,accepted] 100
- nginx.status[connections,handled] 100
- nginx.status[connections,requests] 500
- nginx.server.discovery {\"data\":[{\"{#SERVERNAME}\":\"www\"}]}
- nginx.status[\"www\",requests] 42
- nginx.status[\"www\",response,1xx] 0
- nginx.status[\"www\",response,2xx] 40
- nginx.status[\"www\",response,3xx] 0
- nginx.status[\"www\",response,4xx] 2
- nginx.status[\"www\",response,5xx] 0
- nginx.status[\"www\",response,bypass] 0
- nginx.status[\"www\",response,expired] 0
- nginx.status[\"www\",response,hit] 0
- nginx.status[\"www\",response,miss] 0
- nginx.status[\"www\",response,revalidated] 0
- nginx.status[\"www\",response,scarce] 0
- nginx.status[\"www\",response,stale] 0
- nginx.status[\"www\",response,updating] 0
- nginx.status[\"www\",in] 1000
- nginx.status[\"www\",out] 2000
";

    fn www_snapshot() -> StatusSnapshot {
        StatusSnapshot {
            connections: Connections {
                active: 5,
                reading: 0,
                writing: 1,
                waiting: 2,
                accepted: 100,
                handled: 100,
                requests: 500,
            },
            server_zones: BTreeMap::from([(
                "www".to_string(),
                ServerStats {
                    request_counter: 42,
                    in_bytes: 1000,
                    out_bytes: 2000,
                    responses: ServerResponses {
                        status: StatusClasses {
                            two_xx: 40,
                            four_xx: 2,
                            ..StatusClasses::default()
                        },
                        ..ServerResponses::default()
                    },
                    ..ServerStats::default()
                },
            )]),
            ..StatusSnapshot::default()
        }
    }

    fn full_snapshot() -> StatusSnapshot {
        let mut snapshot = www_snapshot();
        snapshot.server_zones.insert("*".to_string(), ServerStats::default());
        snapshot.upstream_zones.insert(
            "backend".to_string(),
            vec![
                UpstreamMemberStats {
                    server: "10.0.0.1:80".to_string(),
                    request_counter: 2,
                    ..UpstreamMemberStats::default()
                },
                UpstreamMemberStats {
                    server: "10.0.0.2:80".to_string(),
                    request_counter: 3,
                    ..UpstreamMemberStats::default()
                },
            ],
        );
        snapshot.cache_zones.insert("static".to_string(), CacheStats::default());
        snapshot
    }

    #[test]
    fn www_scenario() {
        assert_eq!(format(&www_snapshot()), WWW_SCENARIO);
    }

    #[test]
    fn empty_snapshot_has_only_connection_lines() {
        let output = format(&StatusSnapshot::default());
        assert_eq!(output.lines().count(), 7);
        assert!(output.lines().all(|line| line.starts_with("- nginx.status[connections,")));
        assert!(!output.contains("discovery"));
    }

    #[test]
    fn discovery_lines_precede_zone_lines() {
        let output = format(&full_snapshot());
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[..7].iter().all(|line| line.contains("[connections,")));
        assert!(lines[7].starts_with("- nginx.server.discovery "));
        assert!(lines[8].starts_with("- nginx.upstream.discovery "));
        assert!(lines[9].starts_with("- nginx.cachezone.discovery "));
        assert!(lines[10..].iter().all(|line| !line.contains("discovery")));

        // 2 server zones x 16, 1 upstream group x 8, 1 cache zone x 10
        assert_eq!(lines.len(), 10 + 32 + 8 + 10);

        let first_upstream = lines.iter().position(|line| line.contains("[upstream,")).unwrap();
        let last_server = lines.iter().rposition(|line| line.contains("nginx.status[\"")).unwrap();
        let first_cache = lines.iter().position(|line| line.contains("[cachezone,")).unwrap();
        assert!(last_server < first_upstream);
        assert!(first_upstream < first_cache);
        assert!(lines.contains(&"- nginx.status[upstream,\"backend\",total] 5"));
        assert!(lines.contains(&"- nginx.status[\"all\",requests] 0"));
    }

    #[test]
    fn formatting_is_idempotent() {
        let snapshot = full_snapshot();
        assert_eq!(format(&snapshot), format(&snapshot));
    }

    #[tokio::test]
    async fn writes_payload_for_live_status_page() {
        let addr = spawn_status_server().await;
        let orchestrator =
            Orchestrator::new(Config::new(&format!("http://{addr}/status/format/json")).unwrap()).unwrap();

        let mut out = Vec::new();
        orchestrator.run(&mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), WWW_SCENARIO);
    }

    #[tokio::test]
    async fn http_error_writes_nothing() {
        let addr = spawn_status_server().await;
        let orchestrator = Orchestrator::new(Config::new(&format!("http://{addr}/unavailable")).unwrap()).unwrap();

        let mut out = Vec::new();
        let err = orchestrator.run(&mut out).await.unwrap_err();
        assert!(out.is_empty());
        assert!(matches!(
            err.downcast_ref::<crate::error::ProbeError>(),
            Some(crate::error::ProbeError::HttpStatus(_))
        ));
    }

    #[tokio::test]
    async fn decode_error_writes_nothing() {
        let addr = spawn_status_server().await;
        let orchestrator = Orchestrator::new(Config::new(&format!("http://{addr}/garbage")).unwrap()).unwrap();

        let mut out = Vec::new();
        let err = orchestrator.run(&mut out).await.unwrap_err();
        assert!(out.is_empty());
        assert!(format!("{err:?}").contains("not a valid VTS document"));
    }
}
