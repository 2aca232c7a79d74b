// src/store/kv.rs

use std::collections::HashMap;
use std::path::PathBuf;

use parking_lot::Mutex;

// As duas únicas chaves persistidas pela aplicação
pub const SESSION_KEY: &str = "stockpilot:session";
pub const THEME_KEY: &str = "stockpilot:theme";

/// Armazenamento chave-valor externo (o "localStorage" do backend).
/// Falha de escrita não é propagada: o chamador segue com o estado em
/// memória e o problema fica registrado no log.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

// ---
// Implementação de produção: um arquivo JSON com o mapa inteiro.
// ---
pub struct FileKvStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileKvStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Arquivo KV corrompido ({}), recomeçando vazio: {}", path.display(), e);
                HashMap::new()
            }),
            Err(_) => HashMap::new(), // arquivo ainda não existe
        };

        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        match serde_json::to_string_pretty(entries) {
            Ok(raw) => {
                if let Err(e) = std::fs::write(&self.path, raw) {
                    tracing::warn!("Falha ao gravar o arquivo KV {}: {}", self.path.display(), e);
                }
            }
            Err(e) => tracing::warn!("Falha ao serializar o mapa KV: {}", e),
        }
    }
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock();
        entries.remove(key);
        self.persist(&entries);
    }
}

// ---
// Implementação em memória (testes)
// ---
#[derive(Default)]
pub struct MemoryKvStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.lock().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().remove(key);
    }
}
