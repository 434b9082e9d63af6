//! Superposición temporal de nombres en un diccionario.
//!
//! `DictOverlap::enter` sustituye/añade claves y devuelve un guard; al
//! soltarlo se restauran los valores sustituidos y se eliminan las claves
//! añadidas. El diccionario se pasa por referencia explícita: no existe un
//! espacio de nombres global que parchear.

use std::hash::Hash;
use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;

pub struct DictOverlap<'a, K: Hash + Eq, V> {
    dictionary: &'a mut IndexMap<K, V>,
    overwritten: Vec<(K, V)>,
    added: Vec<K>,
}

impl<'a, K: Hash + Eq + Clone, V> DictOverlap<'a, K, V> {
    pub fn enter<I: IntoIterator<Item = (K, V)>>(dictionary: &'a mut IndexMap<K, V>, overlay: I) -> Self {
        let mut overwritten: Vec<(K, V)> = vec![];
        let mut added: Vec<K> = vec![];

        for (k, v) in overlay {
            match dictionary.insert(k.clone(), v) {
                // una clave repetida en el overlay conserva el valor original
                Some(old) => {
                    if !added.contains(&k) && !overwritten.iter().any(|(ok, _)| ok == &k) {
                        overwritten.push((k, old));
                    }
                }
                None => added.push(k),
            }
        }

        Self { dictionary, overwritten, added }
    }

    /// Claves que existían y fueron sustituidas.
    pub fn overwritten_keys(&self) -> impl Iterator<Item = &K> {
        self.overwritten.iter().map(|(k, _)| k)
    }

    /// Claves nuevas que se eliminarán al salir.
    pub fn added_keys(&self) -> &[K] {
        &self.added
    }
}

impl<K: Hash + Eq, V> Deref for DictOverlap<'_, K, V> {
    type Target = IndexMap<K, V>;

    fn deref(&self) -> &Self::Target {
        self.dictionary
    }
}

impl<K: Hash + Eq, V> DerefMut for DictOverlap<'_, K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.dictionary
    }
}

impl<K: Hash + Eq, V> Drop for DictOverlap<'_, K, V> {
    fn drop(&mut self) {
        for (k, v) in self.overwritten.drain(..) {
            self.dictionary.insert(k, v);
        }
        for k in self.added.drain(..) {
            self.dictionary.shift_remove(&k);
        }
    }
}
