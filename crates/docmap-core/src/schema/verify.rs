use super::{DefinitionKind, DependencyChain, EmbedKind, Map};
use crate::{bail, Result};

struct Verify<'a> {
    map: &'a Map,
    chain: DependencyChain,
}

impl Map {
    /// Checks the structural invariants of the map and of every map it
    /// embeds: the key and attribute indices are inverse, every key is
    /// readable and writable, embed kinds agree with the definitions, and no
    /// class embeds itself.
    pub fn verify(&self) -> Result<()> {
        Verify {
            map: self,
            chain: DependencyChain::new(),
        }
        .verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        self.chain.check(self.map.class_name())?;

        self.verify_indices_are_inverse()?;
        self.verify_keys_are_bound()?;
        self.verify_embeds()?;

        let chain = self.chain.with(self.map.class_name());

        for key in self.map.keys() {
            if let Some(embed_map) = self.map.embed_map(key) {
                Verify {
                    map: embed_map,
                    chain: chain.clone(),
                }
                .verify()?;
            }
        }

        Ok(())
    }

    fn verify_indices_are_inverse(&self) -> Result<()> {
        let map = self.map;

        if map.storage_index.len() != map.attribute_index.len() {
            bail!(
                "`{}`: {} storage keys but {} attributes",
                map.class_name,
                map.storage_index.len(),
                map.attribute_index.len()
            );
        }

        for (key, attribute) in &map.storage_index {
            if map.storage_key_for(attribute) != Some(key.as_str()) {
                bail!(
                    "`{}`: storage key `{key}` maps to `{attribute}` but not back",
                    map.class_name
                );
            }

            match map.definition(key) {
                Some(definition) if definition.attribute_name == *attribute => {}
                _ => bail!("`{}`: no definition for storage key `{key}`", map.class_name),
            }
        }

        Ok(())
    }

    fn verify_keys_are_bound(&self) -> Result<()> {
        let map = self.map;

        for key in map.keys() {
            let by_methods = map.accessor(key).is_some() && map.mutator(key).is_some();

            if !by_methods && map.field(key).is_none() {
                bail!("`{}`: storage key `{key}` has no binding", map.class_name);
            }
        }

        Ok(())
    }

    fn verify_embeds(&self) -> Result<()> {
        let map = self.map;

        for definition in map.definitions() {
            let key = definition.storage_key.as_str();

            let expected = match definition.kind {
                DefinitionKind::Scalar => None,
                DefinitionKind::Native => Some(EmbedKind::Native),
                DefinitionKind::Document => Some(EmbedKind::Document),
                DefinitionKind::Collection => Some(EmbedKind::Collection),
            };

            if map.embed_kind(key) != expected {
                bail!(
                    "`{}`: embed kind of `{key}` disagrees with its definition",
                    map.class_name
                );
            }

            let needs_map = definition.is_embedded();

            match (needs_map, map.embed_map(key)) {
                (true, Some(embed_map)) => {
                    if definition.mapped_class.as_deref() != Some(embed_map.class_name()) {
                        bail!(
                            "`{}`: embedded map of `{key}` is for `{}`",
                            map.class_name,
                            embed_map.class_name()
                        );
                    }
                }
                (true, None) => {
                    bail!("`{}`: embedded key `{key}` has no map", map.class_name)
                }
                (false, Some(_)) => {
                    bail!("`{}`: scalar key `{key}` has an embedded map", map.class_name)
                }
                (false, None) => {}
            }
        }

        Ok(())
    }
}
