//! Type interning for structural deduplication.
//!
//! Converts `TypeData` structures into lightweight `TypeId` handles.
//! Structurally equal types get the same id, so type equality is an integer
//! comparison. All methods take `&self`; the tables sit behind `RwLock`s so a
//! shared interner is `Sync`.

use crate::types::*;
use rustc_hash::FxHashMap;
use setlint_common::{Atom, SyncInterner};
use smallvec::SmallVec;
use std::hash::Hash;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

const TYPE_LIST_INLINE: usize = 8;

type TypeListBuffer = SmallVec<[TypeId; TYPE_LIST_INLINE]>;

struct SliceInterner<T> {
    items: Vec<Arc<[T]>>,
    map: FxHashMap<Arc<[T]>, u32>,
}

impl<T> SliceInterner<T>
where
    T: Eq + Hash,
{
    fn new() -> Self {
        let empty: Arc<[T]> = Arc::from(Vec::new());
        let mut map = FxHashMap::default();
        map.insert(empty.clone(), 0);
        SliceInterner {
            items: vec![empty],
            map,
        }
    }

    fn intern(&mut self, items: Vec<T>) -> u32 {
        if items.is_empty() {
            return 0;
        }

        if let Some(&id) = self.map.get(items.as_slice()) {
            return id;
        }

        let arc: Arc<[T]> = items.into();
        let id = self.items.len() as u32;
        self.items.push(arc.clone());
        self.map.insert(arc, id);
        id
    }

    fn get(&self, id: u32) -> Option<Arc<[T]>> {
        self.items.get(id as usize).cloned()
    }

    fn empty(&self) -> Arc<[T]> {
        self.items
            .first()
            .cloned()
            .unwrap_or_else(|| Arc::from(Vec::new()))
    }
}

struct ValueInterner<T> {
    items: Vec<Arc<T>>,
    map: FxHashMap<Arc<T>, u32>,
}

impl<T> ValueInterner<T>
where
    T: Eq + Hash,
{
    fn new() -> Self {
        ValueInterner {
            items: Vec::new(),
            map: FxHashMap::default(),
        }
    }

    fn intern(&mut self, value: T) -> u32 {
        if let Some(&id) = self.map.get(&value) {
            return id;
        }

        let arc = Arc::new(value);
        let id = self.items.len() as u32;
        self.items.push(arc.clone());
        self.map.insert(arc, id);
        id
    }

    fn get(&self, id: u32) -> Option<Arc<T>> {
        self.items.get(id as usize).cloned()
    }
}

struct TypeStore {
    key_to_id: FxHashMap<TypeData, TypeId>,
    id_to_key: Vec<TypeData>,
}

/// Type interning table.
pub struct TypeInterner {
    types: RwLock<TypeStore>,
    /// String interner for type names and string literals.
    pub string_interner: SyncInterner,
    type_lists: RwLock<SliceInterner<TypeId>>,
    template_lists: RwLock<SliceInterner<TemplateSpan>>,
    object_shapes: RwLock<ValueInterner<ObjectShape>>,
    applications: RwLock<ValueInterner<TypeApplication>>,
    next_type_param: AtomicU32,
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInterner {
    /// Create a new type interner with pre-registered intrinsics.
    pub fn new() -> Self {
        TypeInterner {
            types: RwLock::new(TypeStore {
                key_to_id: FxHashMap::default(),
                id_to_key: Vec::new(),
            }),
            string_interner: SyncInterner::new(),
            type_lists: RwLock::new(SliceInterner::new()),
            template_lists: RwLock::new(SliceInterner::new()),
            object_shapes: RwLock::new(ValueInterner::new()),
            applications: RwLock::new(ValueInterner::new()),
            next_type_param: AtomicU32::new(0),
        }
    }

    pub fn intern_string(&self, s: &str) -> Atom {
        self.string_interner.intern(s)
    }

    pub fn resolve_atom(&self, atom: Atom) -> Arc<str> {
        self.string_interner.resolve(atom)
    }

    pub fn type_list(&self, id: TypeListId) -> Arc<[TypeId]> {
        let lists = self
            .type_lists
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        lists.get(id.0).unwrap_or_else(|| lists.empty())
    }

    pub fn template_list(&self, id: TemplateLiteralId) -> Arc<[TemplateSpan]> {
        let lists = self
            .template_lists
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        lists.get(id.0).unwrap_or_else(|| lists.empty())
    }

    pub fn object_shape(&self, id: ObjectShapeId) -> Arc<ObjectShape> {
        self.object_shapes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id.0)
            .unwrap_or_else(|| Arc::new(ObjectShape::default()))
    }

    pub fn type_application(&self, id: TypeApplicationId) -> Arc<TypeApplication> {
        self.applications
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id.0)
            .unwrap_or_else(|| {
                Arc::new(TypeApplication {
                    base: Atom::NONE,
                    args: Vec::new(),
                })
            })
    }

    /// Intern a type and return its TypeId.
    /// If the data already exists, returns the existing TypeId.
    pub fn intern(&self, data: TypeData) -> TypeId {
        if let Some(id) = self.get_intrinsic_id(&data) {
            return id;
        }

        {
            let store = self.types.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(&id) = store.key_to_id.get(&data) {
                return id;
            }
        }

        let mut store = self.types.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(&id) = store.key_to_id.get(&data) {
            return id;
        }

        let Some(id) = u32::try_from(store.id_to_key.len())
            .ok()
            .and_then(|local| local.checked_add(TypeId::FIRST_USER))
        else {
            // Return error type instead of panicking
            return TypeId::ERROR;
        };
        let id = TypeId(id);
        store.id_to_key.push(data.clone());
        store.key_to_id.insert(data, id);
        id
    }

    /// Look up the TypeData for a given TypeId.
    pub fn lookup(&self, id: TypeId) -> Option<TypeData> {
        if id.is_intrinsic() {
            return self.get_intrinsic_data(id);
        }

        let local = id.0.checked_sub(TypeId::FIRST_USER)?;
        let store = self.types.read().unwrap_or_else(PoisonError::into_inner);
        store.id_to_key.get(local as usize).cloned()
    }

    /// Category flags of a type. Unknown ids report `ANY`, like the error type.
    pub fn flags(&self, id: TypeId) -> TypeFlags {
        self.lookup(id)
            .map(|data| data.flags())
            .unwrap_or(TypeFlags::ANY)
    }

    /// Members of a union or intersection; `None` for any other type.
    pub fn composite_members(&self, id: TypeId) -> Option<Arc<[TypeId]>> {
        match self.lookup(id)? {
            TypeData::Union(list) | TypeData::Intersection(list) => Some(self.type_list(list)),
            _ => None,
        }
    }

    /// Get the number of interned types, intrinsics included.
    pub fn len(&self) -> usize {
        TypeId::FIRST_USER as usize
            + self
                .types
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .id_to_key
                .len()
    }

    /// Check if the interner only holds intrinsics.
    pub fn is_empty(&self) -> bool {
        self.len() <= TypeId::FIRST_USER as usize
    }

    fn get_intrinsic_id(&self, data: &TypeData) -> Option<TypeId> {
        match data {
            TypeData::Intrinsic(kind) => Some(kind.to_type_id()),
            TypeData::Error => Some(TypeId::ERROR),
            TypeData::Literal(LiteralValue::Boolean(true)) => Some(TypeId::BOOLEAN_TRUE),
            TypeData::Literal(LiteralValue::Boolean(false)) => Some(TypeId::BOOLEAN_FALSE),
            _ => None,
        }
    }

    fn get_intrinsic_data(&self, id: TypeId) -> Option<TypeData> {
        match id {
            TypeId::NONE | TypeId::ERROR => Some(TypeData::Error),
            TypeId::BOOLEAN_TRUE => Some(TypeData::Literal(LiteralValue::Boolean(true))),
            TypeId::BOOLEAN_FALSE => Some(TypeData::Literal(LiteralValue::Boolean(false))),
            _ => IntrinsicKind::from_type_id(id).map(TypeData::Intrinsic),
        }
    }

    // =========================================================================
    // Convenience constructors
    // =========================================================================

    pub fn literal_string(&self, value: &str) -> TypeId {
        let atom = self.intern_string(value);
        self.intern(TypeData::Literal(LiteralValue::String(atom)))
    }

    pub fn literal_number(&self, value: f64) -> TypeId {
        self.intern(TypeData::Literal(LiteralValue::Number(OrderedFloat(value))))
    }

    pub fn literal_boolean(&self, value: bool) -> TypeId {
        if value {
            TypeId::BOOLEAN_TRUE
        } else {
            TypeId::BOOLEAN_FALSE
        }
    }

    /// BigInt literal from its digits (`"10"` for `10n`).
    pub fn literal_bigint(&self, digits: &str) -> TypeId {
        let atom = self.intern_string(digits);
        self.intern(TypeData::Literal(LiteralValue::BigInt(atom)))
    }

    /// Intern a union type, normalizing and deduplicating members.
    ///
    /// Nested unions are flattened, `never` members are dropped and member
    /// order is preserved. `any` and `unknown` absorb the whole union.
    pub fn union(&self, members: Vec<TypeId>) -> TypeId {
        let mut flat = TypeListBuffer::new();
        for member in members {
            if member.is_any() || member.is_error() {
                return TypeId::ANY;
            }
            if member.is_unknown() {
                return TypeId::UNKNOWN;
            }
            if member.is_never() {
                continue;
            }
            match self.lookup(member) {
                Some(TypeData::Union(list)) => {
                    for &inner in self.type_list(list).iter() {
                        push_unique(&mut flat, inner);
                    }
                }
                _ => push_unique(&mut flat, member),
            }
        }

        match flat.len() {
            0 => TypeId::NEVER,
            1 => flat[0],
            _ => {
                let list = self.intern_type_list(flat.into_vec());
                self.intern(TypeData::Union(list))
            }
        }
    }

    /// Intern an intersection type, flattening nested intersections.
    ///
    /// `never` absorbs the intersection and `unknown` members are dropped.
    pub fn intersection(&self, members: Vec<TypeId>) -> TypeId {
        let mut flat = TypeListBuffer::new();
        for member in members {
            if member.is_never() {
                return TypeId::NEVER;
            }
            if member.is_any() || member.is_error() {
                return TypeId::ANY;
            }
            if member.is_unknown() {
                continue;
            }
            match self.lookup(member) {
                Some(TypeData::Intersection(list)) => {
                    for &inner in self.type_list(list).iter() {
                        push_unique(&mut flat, inner);
                    }
                }
                _ => push_unique(&mut flat, member),
            }
        }

        match flat.len() {
            0 => TypeId::UNKNOWN,
            1 => flat[0],
            _ => {
                let list = self.intern_type_list(flat.into_vec());
                self.intern(TypeData::Intersection(list))
            }
        }
    }

    /// Create a fresh type parameter. Every call yields a distinct type, even
    /// for the same name.
    pub fn type_param(&self, name: &str) -> TypeId {
        let id = self.next_type_param.fetch_add(1, Ordering::Relaxed);
        let name = self.intern_string(name);
        self.intern(TypeData::TypeParameter(TypeParamInfo { name, id }))
    }

    /// Instantiate a named generic type, e.g. `application("Set", vec![NUMBER])`.
    pub fn application(&self, base: &str, args: Vec<TypeId>) -> TypeId {
        let base = self.intern_string(base);
        let app = self.intern_application(TypeApplication { base, args });
        self.intern(TypeData::Application(app))
    }

    pub fn array(&self, element: TypeId) -> TypeId {
        self.intern(TypeData::Array(element))
    }

    pub fn object(&self, properties: Vec<PropertyInfo>) -> TypeId {
        let shape = self.intern_object_shape(ObjectShape { properties });
        self.intern(TypeData::Object(shape))
    }

    /// A non-generic named type (`Date`, `Foo`).
    pub fn reference(&self, name: &str) -> TypeId {
        let name = self.intern_string(name);
        self.intern(TypeData::Reference(name))
    }

    pub fn template_literal(&self, spans: Vec<TemplateSpan>) -> TypeId {
        let list = self.intern_template_list(spans);
        self.intern(TypeData::TemplateLiteral(list))
    }

    pub fn string_intrinsic(&self, kind: StringIntrinsicKind, type_arg: TypeId) -> TypeId {
        self.intern(TypeData::StringIntrinsic { kind, type_arg })
    }

    fn intern_type_list(&self, members: Vec<TypeId>) -> TypeListId {
        let mut lists = self
            .type_lists
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        TypeListId(lists.intern(members))
    }

    fn intern_template_list(&self, spans: Vec<TemplateSpan>) -> TemplateLiteralId {
        let mut lists = self
            .template_lists
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        TemplateLiteralId(lists.intern(spans))
    }

    fn intern_object_shape(&self, shape: ObjectShape) -> ObjectShapeId {
        let mut shapes = self
            .object_shapes
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        ObjectShapeId(shapes.intern(shape))
    }

    fn intern_application(&self, application: TypeApplication) -> TypeApplicationId {
        let mut apps = self
            .applications
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        TypeApplicationId(apps.intern(application))
    }
}

#[inline]
fn push_unique(buffer: &mut TypeListBuffer, id: TypeId) {
    if !buffer.contains(&id) {
        buffer.push(id);
    }
}

#[cfg(test)]
#[path = "../tests/intern_tests.rs"]
mod tests;
