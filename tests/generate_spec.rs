mod common;

use std::fs;

use folio::generate::build_site;
use speculate2::speculate;

speculate! {
    before {
        let store = common::store();
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let public = root.path().join("public");
        let out = root.path().join("dist");
    }

    describe "build_site" {
        it "writes index.html with the default filter active" {
            let report = build_site(&store, &public, &out).expect("Build failed");

            assert_eq!(report.index, out.join("index.html"));
            assert_eq!(report.assets_copied, 0);
            let html = fs::read_to_string(&report.index).expect("index.html missing");
            assert!(html.contains("data-active-filter=\"featured\""));
            assert!(html.contains("id=\"poetry\""));
        }

        it "copies public assets recursively" {
            fs::create_dir_all(public.join("images")).expect("mkdir failed");
            fs::write(public.join("images/me.jpg"), b"jpeg").expect("write failed");
            fs::write(public.join("cv.pdf"), b"pdf").expect("write failed");

            let report = build_site(&store, &public, &out).expect("Build failed");

            assert_eq!(report.assets_copied, 2);
            assert_eq!(fs::read(out.join("images/me.jpg")).expect("asset missing"), b"jpeg");
            assert!(out.join("cv.pdf").is_file());
        }

        it "skips the output directory when it sits inside public" {
            let nested = public.join("dist");
            fs::create_dir_all(&public).expect("mkdir failed");
            fs::write(public.join("cv.pdf"), b"pdf").expect("write failed");

            build_site(&store, &public, &nested).expect("First build failed");
            let report = build_site(&store, &public, &nested).expect("Second build failed");

            assert_eq!(report.assets_copied, 1);
            assert!(nested.join("cv.pdf").is_file());
            assert!(!nested.join("dist").exists());
        }

        it "does not copy assets onto themselves when public is the output" {
            fs::create_dir_all(&public).expect("mkdir failed");
            fs::write(public.join("cv.pdf"), b"pdf").expect("write failed");

            let report = build_site(&store, &public, &public).expect("Build failed");

            assert_eq!(report.assets_copied, 0);
            assert_eq!(fs::read(public.join("cv.pdf")).expect("asset missing"), b"pdf");
            assert!(public.join("index.html").is_file());
        }

        it "overwrites a previous build" {
            build_site(&store, &public, &out).expect("First build failed");
            build_site(&store, &public, &out).expect("Second build failed");
            assert!(out.join("index.html").is_file());
        }
    }
}
