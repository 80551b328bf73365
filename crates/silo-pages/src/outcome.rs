//! Page outcomes: a rendered view bundle or a redirect.

/// A redirect to another route. A normal control-flow outcome for lenient
/// gates, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub location: String,
}

impl Redirect {
    /// Redirect to an absolute path.
    #[inline]
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// Redirect to the login page with a `redirect` hint naming the route
    /// the user was trying to reach, so login can return them there.
    #[inline]
    pub fn login(route: &str) -> Self {
        Self {
            location: format!("/login?redirect={route}"),
        }
    }
}

/// Result of a page operation: either a fully-resolved view bundle for the
/// renderer, or a redirect.
#[derive(Debug, Clone)]
pub enum PageOutcome<T> {
    Page(T),
    Redirect(Redirect),
}

impl<T> PageOutcome<T> {
    /// Wrap a view bundle.
    #[inline]
    pub fn page(view: T) -> Self {
        Self::Page(view)
    }

    /// The redirect location, if this outcome is a redirect.
    #[inline]
    pub fn location(&self) -> Option<&str> {
        match self {
            Self::Redirect(r) => Some(&r.location),
            Self::Page(_) => None,
        }
    }

    /// The view bundle, if this outcome is a page.
    #[inline]
    pub fn view(&self) -> Option<&T> {
        match self {
            Self::Page(v) => Some(v),
            Self::Redirect(_) => None,
        }
    }
}

impl<T> From<Redirect> for PageOutcome<T> {
    #[inline]
    fn from(redirect: Redirect) -> Self {
        Self::Redirect(redirect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_redirect_carries_route_hint() {
        let r = Redirect::login("account/upgrade");
        assert_eq!(r.location, "/login?redirect=account/upgrade");
    }

    #[test]
    fn outcome_accessors() {
        let page: PageOutcome<u32> = PageOutcome::page(7);
        assert_eq!(page.view(), Some(&7));
        assert!(page.location().is_none());

        let redirect: PageOutcome<u32> = Redirect::to("/account").into();
        assert_eq!(redirect.location(), Some("/account"));
        assert!(redirect.view().is_none());
    }
}
