//! Built-in license texts, embedded at compile time.

use crate::manifest::LicenseTemplate;

/// License used when the caller names none.
pub const DEFAULT_LICENSE: &str = "bsd3";

#[derive(Clone, Copy)]
enum Header {
    None,
    /// Generated `SPDX-License-Identifier` notice.
    Spdx,
    Text(&'static str),
}

struct Builtin {
    id: &'static str,
    name: &'static str,
    spdx: &'static str,
    body: &'static str,
    header: Header,
}

const BUILTINS: &[Builtin] = &[
    Builtin {
        id: "bsd2",
        name: "BSD 2-Clause \"Simplified\" License",
        spdx: "BSD-2-Clause",
        body: include_str!("../templates/bsd2.txt"),
        header: Header::Spdx,
    },
    Builtin {
        id: "bsd3",
        name: "BSD 3-Clause \"New\" or \"Revised\" License",
        spdx: "BSD-3-Clause",
        body: include_str!("../templates/bsd3.txt"),
        header: Header::Spdx,
    },
    Builtin {
        id: "mit",
        name: "MIT License",
        spdx: "MIT",
        body: include_str!("../templates/mit.txt"),
        header: Header::Spdx,
    },
    Builtin {
        id: "isc",
        name: "ISC License",
        spdx: "ISC",
        body: include_str!("../templates/isc.txt"),
        header: Header::Spdx,
    },
    Builtin {
        id: "apache",
        name: "Apache License 2.0",
        spdx: "Apache-2.0",
        body: include_str!("../templates/apache.txt"),
        header: Header::Text(include_str!("../templates/apache-header.txt")),
    },
    Builtin {
        id: "zlib",
        name: "zlib License",
        spdx: "Zlib",
        body: include_str!("../templates/zlib.txt"),
        header: Header::Spdx,
    },
    Builtin {
        id: "x11",
        name: "X11 License",
        spdx: "X11",
        body: include_str!("../templates/x11.txt"),
        header: Header::Spdx,
    },
    Builtin {
        id: "0bsd",
        name: "BSD Zero Clause License",
        spdx: "0BSD",
        body: include_str!("../templates/0bsd.txt"),
        header: Header::Spdx,
    },
    Builtin {
        id: "agpl3",
        name: "GNU Affero General Public License v3.0",
        spdx: "AGPL-3.0-or-later",
        body: include_str!("../templates/agpl3.txt"),
        header: Header::Text(include_str!("../templates/agpl3-header.txt")),
    },
    Builtin {
        id: "cc0",
        name: "Creative Commons Zero v1.0 Universal",
        spdx: "CC0-1.0",
        body: include_str!("../templates/cc0.txt"),
        header: Header::Spdx,
    },
    Builtin {
        id: "cc_by",
        name: "Creative Commons Attribution 4.0 International",
        spdx: "CC-BY-4.0",
        body: include_str!("../templates/cc_by.txt"),
        header: Header::Spdx,
    },
    Builtin {
        id: "cc_by_nc",
        name: "Creative Commons Attribution Non Commercial 4.0 International",
        spdx: "CC-BY-NC-4.0",
        body: include_str!("../templates/cc_by_nc.txt"),
        header: Header::Spdx,
    },
    Builtin {
        id: "cc_by_nc_nd",
        name: "Creative Commons Attribution Non Commercial No Derivatives 4.0 International",
        spdx: "CC-BY-NC-ND-4.0",
        body: include_str!("../templates/cc_by_nc_nd.txt"),
        header: Header::Spdx,
    },
    Builtin {
        id: "cc_by_nc_sa",
        name: "Creative Commons Attribution Non Commercial Share Alike 4.0 International",
        spdx: "CC-BY-NC-SA-4.0",
        body: include_str!("../templates/cc_by_nc_sa.txt"),
        header: Header::Spdx,
    },
    Builtin {
        id: "cc_by_nd",
        name: "Creative Commons Attribution No Derivatives 4.0 International",
        spdx: "CC-BY-ND-4.0",
        body: include_str!("../templates/cc_by_nd.txt"),
        header: Header::Spdx,
    },
    Builtin {
        id: "cc_by_sa",
        name: "Creative Commons Attribution Share Alike 4.0 International",
        spdx: "CC-BY-SA-4.0",
        body: include_str!("../templates/cc_by_sa.txt"),
        header: Header::Spdx,
    },
    Builtin {
        id: "cddl",
        name: "Common Development and Distribution License 1.0",
        spdx: "CDDL-1.0",
        body: include_str!("../templates/cddl.txt"),
        header: Header::Spdx,
    },
    Builtin {
        id: "epl",
        name: "Eclipse Public License 1.0",
        spdx: "EPL-1.0",
        body: include_str!("../templates/epl.txt"),
        header: Header::Spdx,
    },
    Builtin {
        id: "gpl2",
        name: "GNU General Public License v2.0",
        spdx: "GPL-2.0-or-later",
        body: include_str!("../templates/gpl2.txt"),
        header: Header::Text(include_str!("../templates/gpl2-header.txt")),
    },
    Builtin {
        id: "gpl3",
        name: "GNU General Public License v3.0",
        spdx: "GPL-3.0-or-later",
        body: include_str!("../templates/gpl3.txt"),
        header: Header::Text(include_str!("../templates/gpl3-header.txt")),
    },
    Builtin {
        id: "lgpl",
        name: "GNU Lesser General Public License v3.0",
        spdx: "LGPL-3.0-or-later",
        body: include_str!("../templates/lgpl.txt"),
        header: Header::Text(include_str!("../templates/lgpl-header.txt")),
    },
    Builtin {
        id: "mpl",
        name: "Mozilla Public License 2.0",
        spdx: "MPL-2.0",
        body: include_str!("../templates/mpl.txt"),
        header: Header::Text(include_str!("../templates/mpl-header.txt")),
    },
    Builtin {
        id: "unlicense",
        name: "The Unlicense",
        spdx: "Unlicense",
        body: include_str!("../templates/unlicense.txt"),
        header: Header::None,
    },
    Builtin {
        id: "wtfpl",
        name: "Do What The F*ck You Want To Public License",
        spdx: "WTFPL",
        body: include_str!("../templates/wtfpl.txt"),
        header: Header::None,
    },
];

fn spdx_notice(spdx: &str) -> String {
    format!(
        "SPDX-License-Identifier: {}\nCopyright (c) {{{{ year }}}} {{{{ organization }}}}\n",
        spdx
    )
}

/// Build the built-in license templates in declaration order.
pub(crate) fn licenses() -> Vec<LicenseTemplate> {
    BUILTINS
        .iter()
        .map(|b| {
            let template = LicenseTemplate::new(b.id, b.name, b.body).with_spdx(b.spdx);
            match b.header {
                Header::None => template,
                Header::Spdx => template.with_header(spdx_notice(b.spdx)),
                Header::Text(text) => template.with_header(text),
            }
        })
        .collect()
}
