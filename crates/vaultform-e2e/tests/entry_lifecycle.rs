//! Full lifecycle tests for credential entry resources and data sources
//! against the in-memory vault.

use vaultform_e2e::MockVault;
use vaultform_entry::{AccessCodeData, ApiKeyData, Entry, EntryData, EntrySubType};
use vaultform_provider::entries::api_key::ApiKeyModel;
use vaultform_provider::entries::secret::SecretModel;
use vaultform_provider::{ModelCommon, Provider, ProviderError, ReadOutcome, Value};

const VAULT_ID: &str = "11111111-1111-1111-1111-111111111111";

fn setup() -> (std::sync::Arc<MockVault>, Provider) {
    vaultform_e2e::init_tracing();
    let vault = MockVault::new();
    let provider = Provider::with_client(vault.clone());
    (vault, provider)
}

fn api_key_plan() -> ApiKeyModel {
    ApiKeyModel {
        common: ModelCommon {
            id: Value::Unknown,
            vault_id: Value::from(VAULT_ID),
            name: Value::from("svc"),
            ..Default::default()
        },
        api_id: Value::from("a"),
        api_key: Value::from("k"),
        tenant_id: Value::Null,
    }
}

#[tokio::test]
async fn test_create_assigns_id_and_reads_back_payload() {
    let (vault, provider) = setup();
    let resource = provider.resource::<ApiKeyModel>();

    let state = resource.create(&api_key_plan()).await.unwrap();

    let id = state.common.id.as_known().expect("id assigned by create");
    assert!(!id.is_empty());
    assert_eq!(state.common.vault_id, Value::from(VAULT_ID));
    assert_eq!(state.common.name, Value::from("svc"));
    assert_eq!(state.api_id, Value::from("a"));
    assert_eq!(state.api_key, Value::from("k"));
    // Unset on the plan, empty at the vault, so unset in the new state.
    assert!(state.tenant_id.is_null());
    assert!(state.common.description.is_null());

    let stored = vault.entry(VAULT_ID, id).unwrap();
    assert!(stored.is_sub_type(EntrySubType::ApiKey));
}

#[tokio::test]
async fn test_read_refreshes_upstream_changes() {
    let (vault, provider) = setup();
    let resource = provider.resource::<ApiKeyModel>();

    let state = resource.create(&api_key_plan()).await.unwrap();
    let id = state.common.id.as_known().unwrap().clone();

    // Someone rotates the key through the vault UI.
    let mut upstream = vault.entry(VAULT_ID, &id).unwrap();
    upstream.data = Some(EntryData::ApiKey(ApiKeyData {
        api_id: "a".to_string(),
        api_key: "rotated".to_string(),
        tenant_id: String::new(),
    }));
    vault.seed(upstream);

    match resource.read(&state).await.unwrap() {
        ReadOutcome::Synced(refreshed) => {
            assert_eq!(refreshed.api_key, Value::from("rotated"));
            assert_eq!(refreshed.common.id, state.common.id);
        }
        ReadOutcome::Removed => panic!("entry should still exist"),
    }
}

#[tokio::test]
async fn test_read_after_external_deletion_removes_state() {
    let (vault, provider) = setup();
    let resource = provider.resource::<ApiKeyModel>();

    let state = resource.create(&api_key_plan()).await.unwrap();
    let id = state.common.id.as_known().unwrap().clone();
    vault.remove(VAULT_ID, &id);

    // Not an error: the driver drops local state.
    assert_eq!(resource.read(&state).await.unwrap(), ReadOutcome::Removed);
}

#[tokio::test]
async fn test_update_rewrites_payload_in_place() {
    let (vault, provider) = setup();
    let resource = provider.resource::<ApiKeyModel>();

    let created = resource.create(&api_key_plan()).await.unwrap();
    let id = created.common.id.as_known().unwrap().clone();

    let mut plan = created.clone();
    plan.api_key = Value::from("k2");
    plan.common.description = Value::from("rotated by plan");

    let state = resource.update(&plan).await.unwrap();
    assert_eq!(state, plan);

    let stored = vault.entry(VAULT_ID, &id).unwrap();
    assert_eq!(stored.description, "rotated by plan");
    assert_eq!(
        stored.data.unwrap().as_api_key().unwrap().api_key,
        "k2"
    );
    // Ids never change on update.
    assert_eq!(stored.id, id);
    assert_eq!(stored.vault_id, VAULT_ID);
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let (vault, provider) = setup();
    let resource = provider.resource::<ApiKeyModel>();

    let state = resource.create(&api_key_plan()).await.unwrap();
    resource.delete(&state).await.unwrap();
    assert_eq!(vault.entry_count(), 0);

    // Already gone upstream is an acceptable outcome, not an error.
    resource.delete(&state).await.unwrap();
}

#[tokio::test]
async fn test_create_failure_surfaces_diagnostic_and_writes_nothing() {
    let (vault, provider) = setup();
    let resource = provider.resource::<ApiKeyModel>();

    vault.set_fail_create(true);
    let err = resource.create(&api_key_plan()).await.unwrap_err();

    let diagnostic = err.diagnostic();
    assert_eq!(diagnostic.summary, "unable to create api key credential entry");
    assert!(diagnostic.detail.contains("simulated create failure"));
    assert_eq!(vault.entry_count(), 0);
}

#[tokio::test]
async fn test_update_failure_passes_message_through() {
    let (vault, provider) = setup();
    let resource = provider.resource::<ApiKeyModel>();

    let state = resource.create(&api_key_plan()).await.unwrap();
    vault.set_fail_update(true);

    let err = resource.update(&state).await.unwrap_err();
    assert!(matches!(err, ProviderError::Client { .. }));
    assert!(err.to_string().contains("simulated update failure"));
}

#[tokio::test]
async fn test_data_source_reads_entry_by_id() {
    let (vault, provider) = setup();

    let entry_id = vault.seed(Entry {
        vault_id: VAULT_ID.to_string(),
        name: "db-password".to_string(),
        path: "infra".to_string(),
        sub_type: EntrySubType::AccessCode,
        data: Some(EntryData::AccessCode(AccessCodeData {
            password: "s3cret".to_string(),
        })),
        ..Default::default()
    });

    let config = SecretModel {
        common: ModelCommon {
            id: Value::known(entry_id.clone()),
            vault_id: Value::from(VAULT_ID),
            ..Default::default()
        },
        ..Default::default()
    };

    let data_source = provider.data_source::<SecretModel>();
    let model = data_source.read(&config).await.unwrap();
    assert_eq!(model.common.name, Value::from("db-password"));
    assert_eq!(model.common.folder, Value::from("infra"));
    assert_eq!(model.secret, Value::from("s3cret"));
}

#[tokio::test]
async fn test_data_source_rejects_malformed_ids() {
    let (vault, provider) = setup();
    let data_source = provider.data_source::<SecretModel>();

    let config = SecretModel {
        common: ModelCommon {
            id: Value::from("not-a-uuid"),
            vault_id: Value::from(VAULT_ID),
            ..Default::default()
        },
        ..Default::default()
    };

    let err = data_source.read(&config).await.unwrap_err();
    assert!(matches!(err, ProviderError::Validation { .. }));
    // Nothing hit the vault.
    assert_eq!(vault.entry_count(), 0);
}

#[tokio::test]
async fn test_data_source_not_found_is_an_error() {
    let (vault, provider) = setup();
    let data_source = provider.data_source::<SecretModel>();

    let config = SecretModel {
        common: ModelCommon {
            id: Value::from("22222222-2222-2222-2222-222222222222"),
            vault_id: Value::from(VAULT_ID),
            ..Default::default()
        },
        ..Default::default()
    };

    // Unlike a resource refresh, a missing entry here is surfaced.
    let err = data_source.read(&config).await.unwrap_err();
    assert!(matches!(err, ProviderError::Client { .. }));
}
