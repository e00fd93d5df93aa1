//! Association inference over the complete entity set.

use std::collections::{HashMap, HashSet};

use crate::model::{
    Association, AssociationKind, Cardinality, FileDeclaration, MethodDetail, PropertyDetail,
};

/// Add HAS-A edges between entities whose members reference each other.
///
/// Every property type, method return type and method argument whose
/// identities name a known entity produces one edge from the owning entity,
/// stored on the owner's file. Owners without an identity produce none.
/// Returns the number of edges added.
pub fn infer_associations(files: &mut [FileDeclaration]) -> usize {
    let found: Vec<Vec<Association>> = {
        let known = known_entities(files);
        let mut seen = HashSet::new();
        files
            .iter()
            .map(|file| {
                file_associations(file, &known)
                    .into_iter()
                    .filter(|a| {
                        seen.insert((a.from.clone(), a.to.clone(), a.label.clone(), a.kind))
                    })
                    .collect()
            })
            .collect()
    };

    let mut added = 0;
    for (file, associations) in files.iter_mut().zip(found) {
        added += associations.len();
        file.member_associations.extend(associations);
    }

    log::debug!("inferred {} member associations", added);
    added
}

/// Entity id to display name, first declaration wins.
fn known_entities(files: &[FileDeclaration]) -> HashMap<&str, &str> {
    let mut known = HashMap::new();
    for file in files {
        let entities = file
            .classes
            .iter()
            .map(|c| (&c.id, &c.name))
            .chain(file.interfaces.iter().map(|i| (&i.id, &i.name)))
            .chain(file.enums.iter().map(|e| (&e.id, &e.name)))
            .chain(file.types.iter().map(|t| (&t.id, &t.name)));
        for (id, name) in entities {
            if !id.is_empty() {
                known.entry(id.as_str()).or_insert(name.as_str());
            }
        }
    }
    known
}

fn file_associations(file: &FileDeclaration, known: &HashMap<&str, &str>) -> Vec<Association> {
    let owners = file
        .classes
        .iter()
        .map(|c| (&c.id, &c.name, &c.properties, &c.methods))
        .chain(
            file.interfaces
                .iter()
                .map(|i| (&i.id, &i.name, &i.properties, &i.methods)),
        )
        .chain(
            file.types
                .iter()
                .map(|t| (&t.id, &t.name, &t.properties, &t.methods)),
        );

    let mut associations = Vec::new();
    for (id, name, properties, methods) in owners {
        if id.is_empty() {
            continue;
        }
        let owner = Owner { id, name, known };
        owner.property_edges(properties, &mut associations);
        owner.method_edges(methods, &mut associations);
    }
    associations
}

struct Owner<'a> {
    id: &'a str,
    name: &'a str,
    known: &'a HashMap<&'a str, &'a str>,
}

impl Owner<'_> {
    fn property_edges(&self, properties: &[PropertyDetail], out: &mut Vec<Association>) {
        for prop in properties {
            let cardinality = Cardinality::of_type(prop.type_name.as_deref());
            self.edges(
                &prop.type_ids,
                &prop.name,
                cardinality,
                AssociationKind::Property,
                out,
            );
        }
    }

    fn method_edges(&self, methods: &[MethodDetail], out: &mut Vec<Association>) {
        for method in methods {
            if let Some(ids) = &method.return_type_ids {
                let cardinality = Cardinality::of_type(method.return_type.as_deref());
                self.edges(ids, &method.name, cardinality, AssociationKind::ReturnType, out);
            }
            for argument in method.argument_ids.iter().flatten() {
                let cardinality = Cardinality::of_type(argument.type_name.as_deref());
                self.edges(
                    &argument.ids,
                    &method.name,
                    cardinality,
                    AssociationKind::Argument,
                    out,
                );
            }
        }
    }

    fn edges(
        &self,
        ids: &[String],
        label: &str,
        cardinality: Cardinality,
        kind: AssociationKind,
        out: &mut Vec<Association>,
    ) {
        let mut targets = HashSet::new();
        for id in ids {
            let Some(target_name) = self.known.get(id.as_str()) else {
                continue;
            };
            if !targets.insert(id.as_str()) {
                continue;
            }
            out.push(Association {
                from: self.id.to_string(),
                from_name: self.name.to_string(),
                to: id.clone(),
                to_name: target_name.to_string(),
                label: label.to_string(),
                cardinality,
                kind,
            });
        }
    }
}
