//! Link-time component registration.

/// Registers a component via `inventory`.
///
/// The qualified name is the invoking module path joined with the type name,
/// so the component lands in the namespace of the module that declares it.
///
/// ```ignore
/// cairn_registry::component!(EmailScopePolicy, {
///     kind: Class,
///     implements: &[SCOPE_POLICY.name],
///     annotations: &[STANDARD_SCOPE],
///     factory: EmailScopePolicy::new,
/// });
/// ```
///
/// `kind` is one of `Class`, `AbstractClass` or `Interface`. Only classes
/// take a `factory`, which is called with no arguments and must return the
/// instance to box.
#[macro_export]
macro_rules! component {
	($name:ident, {
		kind: $kind:ident
		$(, extends: $extends:expr)?
		$(, implements: $implements:expr)?
		$(, annotations: $annotations:expr)?
		$(, factory: $factory:expr)?
		$(,)?
	}) => {
		$crate::__private::paste::paste! {
			#[doc(hidden)]
			fn [<__load_ $name:snake>]() -> ::core::result::Result<::core::option::Option<$crate::Factory>, $crate::LoadError> {
				::core::result::Result::Ok($crate::__component_factory!($({$factory})?))
			}

			pub static [<$name:snake:upper _COMPONENT>]: $crate::ComponentDef = $crate::ComponentDef {
				qualified_name: concat!(module_path!(), "::", stringify!($name)),
				kind: $crate::TypeKind::$kind,
				extends: $crate::__component_opt!($({::core::option::Option::Some($extends)})?, ::core::option::Option::None),
				implements: $crate::__component_opt!($({$implements})?, &[]),
				annotations: $crate::__component_opt!($({$annotations})?, &[]),
				loader: [<__load_ $name:snake>],
			};

			$crate::__private::inventory::submit! { $crate::ComponentReg(&[<$name:snake:upper _COMPONENT>]) }
		}
	};
}

/// Selects a provided value or falls back to a default.
#[doc(hidden)]
#[macro_export]
macro_rules! __component_opt {
	({$val:expr}, $default:expr) => {
		$val
	};
	(, $default:expr) => {
		$default
	};
}

/// Wraps an optional factory expression into a boxed-instance constructor.
#[doc(hidden)]
#[macro_export]
macro_rules! __component_factory {
	({$factory:expr}) => {{
		fn factory() -> $crate::Instance {
			::std::boxed::Box::new(($factory)())
		}
		::core::option::Option::Some(factory as $crate::Factory)
	}};
	() => {
		::core::option::Option::None
	};
}
